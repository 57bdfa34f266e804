// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manifest files loaded from disk, checked, and registered.

use std::io::Write;
use std::sync::Arc;

use weft_core::{FnComponent, Node, ProjectId, Props};
use weft_registry::{
    load_descriptor_manifest, search_catalog, switch_meta, validate_descriptor, Descriptor,
    DescriptorIssue, Registry,
};

fn write_manifest(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn manifest_on_disk_registers_scoped_component() {
    let file = write_manifest(
        r#"
[component]
name = "PricingCard"
import_path = "./components/PricingCard"
is_default_export = true
project_id = "p1"

[component.props.title]
type = "string"

[component.props.price]
type = "number"
min = 0.0

[component.prop_types]
title = "string"
price = "number"
"#,
    );
    let manifest = load_descriptor_manifest(file.path()).unwrap();
    validate_descriptor(&manifest.descriptor, &manifest.prop_types).unwrap();

    let Descriptor::Component(meta) = manifest.descriptor else {
        panic!("expected component descriptor");
    };
    assert!(meta.is_default_export);

    let registry = Arc::new(Registry::new());
    let card = FnComponent::shared("PricingCard", |_, _| Ok(Node::host("article", Props::new())));
    registry.register_component(card.clone(), meta);

    let p1 = ProjectId::from("p1");
    let found = registry.find_component("PricingCard", Some(&p1)).unwrap();
    assert_eq!(found.component, card);
    assert!(registry.find_component("PricingCard", None).is_none());
}

#[test]
fn manifest_with_authoring_mistakes_reports_every_issue() {
    let file = write_manifest(
        r#"
[component]
name = "Toggle"
import_path = "./Toggle"

[component.props.on]
type = "boolean"
edit_only = true

[component.props.size]
type = "choice"
options = []

[component.prop_types]
on = "string"
"#,
    );
    let manifest = load_descriptor_manifest(file.path()).unwrap();
    let issues = validate_descriptor(&manifest.descriptor, &manifest.prop_types).unwrap_err();

    assert_eq!(issues.len(), 3);
    assert!(issues.contains(&DescriptorIssue::MissingUncontrolledProp { prop: "on".into() }));
    assert!(issues.contains(&DescriptorIssue::EmptyChoiceOptions { prop: "size".into() }));
    assert!(issues
        .iter()
        .any(|i| matches!(i, DescriptorIssue::IncompatibleType { prop, .. } if prop == "on")));
}

#[test]
fn missing_manifest_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_descriptor_manifest(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("cannot read descriptor manifest"));
}

#[test]
fn builtin_switch_descriptor_is_valid_and_searchable() {
    let meta = switch_meta();
    validate_descriptor(&Descriptor::Component(meta.clone()), &Default::default()).unwrap();
    assert_eq!(search_catalog("switch"), vec![meta.clone()]);
    assert_eq!(search_catalog("ANTD"), vec![meta]);
    assert!(search_catalog("carousel").is_empty());
}

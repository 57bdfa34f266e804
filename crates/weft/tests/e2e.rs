// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the `weft` binary and the render pipeline.
//!
//! Binary tests run against an explicit config file in a temp directory, so
//! they do not depend on the machine's XDG config.

use std::path::Path;
use std::process::{Command, Output};

use weft_core::{Props, RenderOptions};
use weft_registry::ComponentMeta;
use weft_test_utils::{MockComponent, TestHarness};

fn weft(dir: &Path, args: &[&str]) -> Output {
    weft_with_env(dir, &[], args)
}

fn weft_with_env(dir: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weft"))
        .arg("--config")
        .arg(dir.join("weft.toml"))
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .envs(env.iter().copied())
        .output()
        .expect("failed to run weft binary")
}

fn workspace(config: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("weft.toml"), config).unwrap();
    dir
}

// ---- Render pipeline ----

#[test]
fn registered_button_renders_with_props_under_one_provider() {
    let btn = MockComponent::new("Btn");
    let harness = TestHarness::builder()
        .with_override(btn.clone(), ComponentMeta::new("MyButton", "./Btn"))
        .build();

    let mut props = Props::new();
    props.insert("label".into(), "Go".into());
    let tree = harness
        .render("MyButton", &RenderOptions::default(), props.clone())
        .unwrap()
        .unwrap();

    assert_eq!(harness.root_provider.render_count(), 1);
    assert_eq!(btn.last_props(), Some(props));
    assert_eq!(tree.to_json()[0]["props"]["label"], "Go");
}

// ---- CLI ----

#[test]
fn catalog_json_lists_builtin_switch() {
    let dir = workspace("");
    let out = weft(dir.path(), &["catalog", "switch", "--json"]);
    assert!(out.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(entries[0]["name"], "AntdSwitch");
    assert_eq!(entries[0]["import_name"], "Switch");
}

#[test]
fn render_prints_expanded_tree() {
    let dir = workspace("");
    let out = weft(
        dir.path(),
        &["render", "AntdSwitch", "--props", r#"{"disabled": true}"#],
    );
    assert!(out.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(
        tree,
        serde_json::json!([{"type": "Switch", "props": {"disabled": true}}])
    );
}

#[test]
fn render_of_manifest_component_uses_project_scope() {
    let dir = workspace("[registry]\ninclude_builtin_catalog = false\nmanifests = [\"card.toml\"]\n");
    std::fs::write(
        dir.path().join("card.toml"),
        "[component]\nname = \"Card\"\nimport_path = \"./Card\"\nproject_id = \"p1\"\n",
    )
    .unwrap();

    let scoped = weft(dir.path(), &["render", "Card", "--project", "p1"]);
    assert!(scoped.status.success());

    let unscoped = weft(dir.path(), &["render", "Card"]);
    assert!(!unscoped.status.success());
    assert!(String::from_utf8_lossy(&unscoped.stderr).contains("no component named `Card`"));
}

#[test]
fn check_reports_authoring_issues() {
    let dir = workspace("");
    let manifest = dir.path().join("toggle.toml");
    std::fs::write(
        &manifest,
        "[component]\nname = \"Toggle\"\nimport_path = \"./Toggle\"\n\n[component.props.on]\ntype = \"boolean\"\nedit_only = true\n",
    )
    .unwrap();

    let out = weft(dir.path(), &["check", manifest.to_str().unwrap(), "--plain"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("edit_only"));
    assert!(stderr.contains("1 issue(s)"));
}

#[test]
fn invalid_config_fails_before_running() {
    let dir = workspace("[logging]\nlevle = \"debug\"\n");
    let out = weft(dir.path(), &["catalog"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("levle"));
}

#[test]
fn env_overrides_are_accepted() {
    let dir = workspace("");
    let out = weft_with_env(
        dir.path(),
        &[("WEFT_LOGGING_LEVEL", "debug"), ("WEFT_LOADER_FORCE_ORIGINAL", "false")],
        &["catalog", "--json"],
    );
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = weft(dir.path(), &["catalog"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("config file not found"));
}

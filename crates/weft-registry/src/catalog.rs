// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builtin descriptors for wrapped third-party widgets.
//!
//! The widgets themselves live in the host application; this module only
//! ships their descriptors and a helper to register an implementation under
//! them.

use weft_core::ComponentRef;

use crate::descriptor::ComponentMeta;
use crate::prop::{PropSchema, PropType};
use crate::registry::Registry;

/// Descriptor for the antd `Switch` control.
pub fn switch_meta() -> ComponentMeta {
    ComponentMeta::new("AntdSwitch", "antd")
        .with_display_name("Antd Switch")
        .with_import_name("Switch")
        .with_prop(
            "autoFocus",
            PropSchema::new(PropType::Boolean).describe("Whether get focus when component mounted"),
        )
        .with_prop(
            "checked",
            PropSchema::new(PropType::Boolean)
                .controlled("defaultChecked")
                .describe("Whether to set the initial state"),
        )
        .with_prop(
            "disabled",
            PropSchema::new(PropType::Boolean).describe("Disable switch"),
        )
        .with_prop(
            "loading",
            PropSchema::new(PropType::Boolean).describe("Loading state of switch"),
        )
        .with_prop("checkedChildren", hidden_slot())
        .with_prop("unCheckedChildren", hidden_slot())
        .with_prop(
            "size",
            PropSchema::new(PropType::choice(["small", "default"]))
                .describe("The size of the Switch"),
        )
}

fn hidden_slot() -> PropSchema {
    PropSchema::new(PropType::Slot {
        hide_placeholder: true,
    })
    .with_default(serde_json::json!([]))
}

/// Register a switch implementation, under `custom_meta` when given.
pub fn register_switch(
    registry: &Registry,
    implementation: ComponentRef,
    custom_meta: Option<ComponentMeta>,
) {
    registry.register_component(implementation, custom_meta.unwrap_or_else(switch_meta));
}

/// Returns every builtin descriptor.
pub fn builtin_catalog() -> Vec<ComponentMeta> {
    vec![switch_meta()]
}

/// Search the builtin catalog by query string.
///
/// Matches name, display name, or import path, case-insensitively. An empty
/// query returns every entry.
pub fn search_catalog(query: &str) -> Vec<ComponentMeta> {
    builtin_catalog()
        .into_iter()
        .filter(|m| m.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Descriptor;
    use crate::prop::PropTypeCategory;
    use crate::validate::validate_descriptor;
    use std::collections::BTreeMap;
    use weft_core::{FnComponent, Node};

    #[test]
    fn switch_meta_shape() {
        let meta = switch_meta();
        assert_eq!(meta.name, "AntdSwitch");
        assert_eq!(meta.display_name(), "Antd Switch");
        assert_eq!(meta.import_name(), "Switch");
        assert_eq!(meta.props.len(), 7);
        assert!(meta.props["checked"].is_controlled());
        assert_eq!(
            meta.props["checked"].uncontrolled_prop.as_deref(),
            Some("defaultChecked")
        );
        assert_eq!(
            meta.props["checkedChildren"].ty,
            PropType::Slot {
                hide_placeholder: true
            }
        );
    }

    #[test]
    fn switch_meta_passes_authoring_checks() {
        let types: BTreeMap<String, PropTypeCategory> = [
            ("autoFocus", PropTypeCategory::Boolean),
            ("checked", PropTypeCategory::Boolean),
            ("disabled", PropTypeCategory::Boolean),
            ("loading", PropTypeCategory::Boolean),
            ("checkedChildren", PropTypeCategory::Other),
            ("unCheckedChildren", PropTypeCategory::Other),
            ("size", PropTypeCategory::String),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        assert!(validate_descriptor(&Descriptor::Component(switch_meta()), &types).is_ok());
    }

    #[test]
    fn register_switch_uses_custom_meta() {
        let registry = Registry::new();
        let switch = FnComponent::shared("Switch", |_, _| Ok(Node::Empty));
        register_switch(&registry, switch.clone(), None);
        register_switch(
            &registry,
            switch.clone(),
            Some(ComponentMeta::new("BrandSwitch", "antd").with_import_name("Switch")),
        );

        assert_eq!(registry.find_component("AntdSwitch", None).unwrap().component, switch);
        assert!(registry.find_component("BrandSwitch", None).is_some());
    }

    #[test]
    fn search_catalog_case_insensitive() {
        assert_eq!(search_catalog("SWITCH").len(), 1);
        assert_eq!(search_catalog("antd").len(), 1);
        assert_eq!(search_catalog("").len(), builtin_catalog().len());
        assert!(search_catalog("xyz_nonexistent").is_empty());
    }
}

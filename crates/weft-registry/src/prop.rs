// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prop schemas describing how a design tool edits a component's props.
//!
//! Each prop carries exactly one [`PropType`] tag. Any tag may additionally be
//! controlled: `edit_only` is set and `uncontrolled_prop` names the prop that
//! supplies the initial value when nothing drives the controlled one
//! (`checked` / `defaultChecked`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The editor type of a single prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropType {
    String,
    Boolean,
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// Arbitrary JSON data.
    #[serde(rename = "json")]
    JsonLike,
    /// One of a fixed set of string options.
    Choice {
        options: Vec<String>,
        #[serde(default)]
        multi_select: bool,
    },
    /// Opaque to the runtime; edited by a tool-provided editor.
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        editor: Option<String>,
    },
    /// Insertion point for caller-supplied content.
    Slot {
        #[serde(default)]
        hide_placeholder: bool,
    },
}

impl PropType {
    /// The tag name as written in descriptor manifests.
    pub fn tag(&self) -> &'static str {
        match self {
            PropType::String => "string",
            PropType::Boolean => "boolean",
            PropType::Number { .. } => "number",
            PropType::JsonLike => "json",
            PropType::Choice { .. } => "choice",
            PropType::Custom { .. } => "custom",
            PropType::Slot { .. } => "slot",
        }
    }

    pub fn number() -> Self {
        PropType::Number {
            min: None,
            max: None,
        }
    }

    pub fn choice<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropType::Choice {
            options: options.into_iter().map(Into::into).collect(),
            multi_select: false,
        }
    }

    pub fn custom() -> Self {
        PropType::Custom { editor: None }
    }

    pub fn slot() -> Self {
        PropType::Slot {
            hide_placeholder: false,
        }
    }
}

/// Schema for a single prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropSchema {
    #[serde(flatten)]
    pub ty: PropType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,

    /// The prop is only driven by the editor; the runtime value comes from
    /// `uncontrolled_prop`.
    #[serde(default)]
    pub edit_only: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uncontrolled_prop: Option<String>,
}

impl PropSchema {
    pub fn new(ty: PropType) -> Self {
        Self {
            ty,
            description: None,
            display_name: None,
            default_value: None,
            edit_only: false,
            uncontrolled_prop: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Mark the prop as controlled, falling back to `uncontrolled_prop`.
    pub fn controlled(mut self, uncontrolled_prop: impl Into<String>) -> Self {
        self.edit_only = true;
        self.uncontrolled_prop = Some(uncontrolled_prop.into());
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.edit_only && self.uncontrolled_prop.is_some()
    }
}

impl From<PropType> for PropSchema {
    fn from(ty: PropType) -> Self {
        PropSchema::new(ty)
    }
}

/// Runtime type category of a prop in the host implementation.
///
/// Used only by the authoring validator to check tag compatibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PropTypeCategory {
    String,
    Boolean,
    Number,
    /// Objects, arrays, content, callbacks.
    Other,
}

impl PropTypeCategory {
    /// Whether a prop of this runtime category may use the given schema tag.
    pub fn accepts(&self, ty: &PropType) -> bool {
        match self {
            PropTypeCategory::String => matches!(
                ty,
                PropType::String
                    | PropType::Choice { .. }
                    | PropType::JsonLike
                    | PropType::Custom { .. }
            ),
            PropTypeCategory::Boolean => matches!(
                ty,
                PropType::Boolean | PropType::JsonLike | PropType::Custom { .. }
            ),
            PropTypeCategory::Number => matches!(
                ty,
                PropType::Number { .. } | PropType::JsonLike | PropType::Custom { .. }
            ),
            PropTypeCategory::Other => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn controlled_boolean_from_json() {
        let schema: PropSchema = serde_json::from_value(serde_json::json!({
            "type": "boolean",
            "edit_only": true,
            "uncontrolled_prop": "defaultChecked",
            "description": "Whether to set the initial state",
        }))
        .unwrap();
        assert_eq!(schema.ty, PropType::Boolean);
        assert!(schema.is_controlled());
        assert_eq!(schema.uncontrolled_prop.as_deref(), Some("defaultChecked"));
    }

    #[test]
    fn choice_from_toml() {
        let schema: PropSchema = toml::from_str(
            r#"
type = "choice"
options = ["small", "default"]
description = "The size"
"#,
        )
        .unwrap();
        assert_eq!(schema.ty, PropType::choice(["small", "default"]));
        assert!(!schema.is_controlled());
    }

    #[test]
    fn json_tag_is_named_json() {
        let schema: PropSchema =
            serde_json::from_value(serde_json::json!({"type": "json"})).unwrap();
        assert_eq!(schema.ty, PropType::JsonLike);
        assert_eq!(schema.ty.tag(), "json");
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<PropSchema, _> =
            serde_json::from_value(serde_json::json!({"type": "color"}));
        assert!(result.is_err());
    }

    #[test]
    fn uncontrolled_prop_without_edit_only_is_not_controlled() {
        let mut schema = PropSchema::new(PropType::Boolean);
        schema.uncontrolled_prop = Some("defaultOpen".into());
        assert!(!schema.is_controlled());
    }

    #[test]
    fn string_category_restricts_tags() {
        let cat = PropTypeCategory::String;
        assert!(cat.accepts(&PropType::String));
        assert!(cat.accepts(&PropType::choice(["a"])));
        assert!(cat.accepts(&PropType::JsonLike));
        assert!(cat.accepts(&PropType::custom()));
        assert!(!cat.accepts(&PropType::Boolean));
        assert!(!cat.accepts(&PropType::number()));
        assert!(!cat.accepts(&PropType::slot()));
    }

    #[test]
    fn boolean_and_number_categories_restrict_tags() {
        assert!(PropTypeCategory::Boolean.accepts(&PropType::Boolean));
        assert!(!PropTypeCategory::Boolean.accepts(&PropType::String));
        assert!(PropTypeCategory::Number.accepts(&PropType::number()));
        assert!(!PropTypeCategory::Number.accepts(&PropType::choice(["1"])));
    }

    #[test]
    fn other_category_accepts_everything() {
        for ty in [
            PropType::String,
            PropType::Boolean,
            PropType::number(),
            PropType::JsonLike,
            PropType::choice(["x"]),
            PropType::custom(),
            PropType::slot(),
        ] {
            assert!(PropTypeCategory::Other.accepts(&ty), "{}", ty.tag());
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(
            PropTypeCategory::from_str("Boolean").unwrap(),
            PropTypeCategory::Boolean
        );
        assert_eq!(PropTypeCategory::Number.to_string(), "number");
    }
}

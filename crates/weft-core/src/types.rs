// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry, loader, and primitives.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::Node;
use crate::error::WeftError;

/// Identifier of the project a component originates from.
///
/// Used as the scope when several sources provide components with the same name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single prop value: plain data or renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain data (strings, booleans, numbers, objects).
    Json(serde_json::Value),
    /// Renderable content, typically slot content.
    Node(Node),
}

impl PropValue {
    /// Returns the boolean value if this is a JSON boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Json(v) => v.as_bool(),
            PropValue::Node(_) => None,
        }
    }

    /// Returns the string value if this is a JSON string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Json(v) => v.as_str(),
            PropValue::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            PropValue::Node(n) => Some(n),
            PropValue::Json(_) => None,
        }
    }

    /// Converts the value to JSON, rendering nodes through [`Node::to_json`].
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PropValue::Json(v) => v.clone(),
            PropValue::Node(n) => n.to_json(),
        }
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        PropValue::Json(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Json(serde_json::Value::Bool(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Json(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Json(serde_json::Value::String(value))
    }
}

impl From<Node> for PropValue {
    fn from(node: Node) -> Self {
        PropValue::Node(node)
    }
}

/// Props passed to a component, keyed by prop name.
pub type Props = BTreeMap<String, PropValue>;

/// Build [`Props`] from a JSON object.
///
/// Every value is kept as [`PropValue::Json`]. Anything other than an object
/// (or `null`, which yields empty props) is rejected.
pub fn props_from_json(value: serde_json::Value) -> Result<Props, WeftError> {
    match value {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(k, v)| (k, PropValue::Json(v)))
            .collect()),
        serde_json::Value::Null => Ok(Props::new()),
        other => Err(WeftError::Config(format!(
            "component props must be a JSON object, got {other}"
        ))),
    }
}

/// Convert [`Props`] to a JSON object.
pub fn props_to_json(props: &Props) -> serde_json::Value {
    serde_json::Value::Object(
        props
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_from_json_object() {
        let props = props_from_json(serde_json::json!({"label": "Go", "count": 2})).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props["label"].as_str(), Some("Go"));
        assert_eq!(props["count"], PropValue::Json(serde_json::json!(2)));
    }

    #[test]
    fn props_from_json_null_is_empty() {
        let props = props_from_json(serde_json::Value::Null).unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn props_from_json_rejects_arrays() {
        let err = props_from_json(serde_json::json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn node_props_serialize_through_node() {
        let mut props = Props::new();
        props.insert("icon".into(), Node::text("*").into());
        props.insert("flag".into(), true.into());
        let json = props_to_json(&props);
        assert_eq!(json["icon"], serde_json::json!("*"));
        assert_eq!(json["flag"], serde_json::json!(true));
    }

    #[test]
    fn project_id_display() {
        let id = ProjectId::from("proj-1");
        assert_eq!(id.to_string(), "proj-1");
        assert_eq!(id.as_str(), "proj-1");
    }
}

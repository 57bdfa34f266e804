// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component and context descriptors.
//!
//! A descriptor tells the design tool how to present and edit a component and
//! tells the code generator how to import it. The runtime only reads `name`,
//! `project_id`, and `ref_prop`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use weft_core::ProjectId;

use crate::prop::PropSchema;

/// Descriptor for a registered component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMeta {
    /// Unique name identifying the component within a loader.
    pub name: String,
    /// Name shown in the design tool. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Identifier used in generated imports. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
    /// Package name or project-relative path the component is imported from.
    pub import_path: String,
    #[serde(default)]
    pub is_default_export: bool,
    /// Schemas for the props the design tool may edit. Other props pass through.
    #[serde(default)]
    pub props: BTreeMap<String, PropSchema>,
    /// Project this registration overrides. `None` matches unscoped requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            import_name: None,
            import_path: import_path.into(),
            is_default_export: false,
            props: BTreeMap::new(),
            project_id: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn import_name(&self) -> &str {
        self.import_name.as_deref().unwrap_or(&self.name)
    }

    /// Case-insensitive match on name, display name, or import path. An
    /// empty query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(query, [self.name.as_str(), self.display_name(), self.import_path.as_str()])
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_import_name(mut self, import_name: impl Into<String>) -> Self {
        self.import_name = Some(import_name.into());
        self
    }

    pub fn with_prop(mut self, name: impl Into<String>, schema: impl Into<PropSchema>) -> Self {
        self.props.insert(name.into(), schema.into());
        self
    }

    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Descriptor for a registered context: a component that wraps children and
/// usually renders nothing of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMeta {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_name: Option<String>,
    pub import_path: String,
    #[serde(default)]
    pub is_default_export: bool,
    #[serde(default)]
    pub props: BTreeMap<String, PropSchema>,
    /// The prop that receives a forwarded handle. `None` means the usual ref.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_prop: Option<String>,
}

impl ContextMeta {
    pub fn new(name: impl Into<String>, import_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            import_name: None,
            import_path: import_path.into(),
            is_default_export: false,
            props: BTreeMap::new(),
            ref_prop: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn import_name(&self) -> &str {
        self.import_name.as_deref().unwrap_or(&self.name)
    }

    pub fn with_prop(mut self, name: impl Into<String>, schema: impl Into<PropSchema>) -> Self {
        self.props.insert(name.into(), schema.into());
        self
    }

    pub fn with_ref_prop(mut self, ref_prop: impl Into<String>) -> Self {
        self.ref_prop = Some(ref_prop.into());
        self
    }
}

/// Either kind of descriptor, as read from a manifest.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    Component(ComponentMeta),
    Context(ContextMeta),
}

impl Descriptor {
    pub fn name(&self) -> &str {
        match self {
            Descriptor::Component(meta) => &meta.name,
            Descriptor::Context(meta) => &meta.name,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Descriptor::Component(meta) => meta.display_name(),
            Descriptor::Context(meta) => meta.display_name(),
        }
    }

    pub fn import_name(&self) -> &str {
        match self {
            Descriptor::Component(meta) => meta.import_name(),
            Descriptor::Context(meta) => meta.import_name(),
        }
    }

    pub fn import_path(&self) -> &str {
        match self {
            Descriptor::Component(meta) => &meta.import_path,
            Descriptor::Context(meta) => &meta.import_path,
        }
    }

    pub fn props(&self) -> &BTreeMap<String, PropSchema> {
        match self {
            Descriptor::Component(meta) => &meta.props,
            Descriptor::Context(meta) => &meta.props,
        }
    }

    /// Case-insensitive match on name, display name, or import path. An
    /// empty query matches.
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(query, [self.name(), self.display_name(), self.import_path()])
    }

    /// "component" or "context".
    pub fn kind(&self) -> &'static str {
        match self {
            Descriptor::Component(_) => "component",
            Descriptor::Context(_) => "context",
        }
    }
}

fn matches_query(query: &str, fields: [&str; 3]) -> bool {
    let query = query.to_lowercase();
    query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prop::PropType;

    #[test]
    fn names_fall_back_to_name() {
        let meta = ComponentMeta::new("FancyButton", "./components/FancyButton");
        assert_eq!(meta.display_name(), "FancyButton");
        assert_eq!(meta.import_name(), "FancyButton");

        let meta = meta
            .with_display_name("Fancy Button")
            .with_import_name("Button");
        assert_eq!(meta.display_name(), "Fancy Button");
        assert_eq!(meta.import_name(), "Button");
    }

    #[test]
    fn builder_collects_props_and_scope() {
        let meta = ComponentMeta::new("Card", "./Card")
            .with_prop("title", PropType::String)
            .with_prop("body", PropType::slot())
            .for_project("proj-a");
        assert_eq!(meta.props.len(), 2);
        assert_eq!(meta.props["body"].ty, PropType::slot());
        assert_eq!(meta.project_id, Some(ProjectId::from("proj-a")));
    }

    #[test]
    fn context_meta_ref_prop() {
        let meta = ContextMeta::new("ThemeProvider", "./theme").with_ref_prop("providerRef");
        assert_eq!(meta.ref_prop.as_deref(), Some("providerRef"));
        let descriptor = Descriptor::Context(meta);
        assert_eq!(descriptor.kind(), "context");
        assert_eq!(descriptor.name(), "ThemeProvider");
    }

    #[test]
    fn query_matches_any_name_field_ignoring_case() {
        let meta = ComponentMeta::new("PricingCard", "./cards/pricing").with_display_name("Pricing Card");
        assert!(meta.matches_query(""));
        assert!(meta.matches_query("pricingcard"));
        assert!(meta.matches_query("ING CA"));
        assert!(meta.matches_query("./CARDS"));
        assert!(!meta.matches_query("switch"));

        let descriptor = Descriptor::Context(ContextMeta::new("ThemeProvider", "./theme"));
        assert!(descriptor.matches_query("theme"));
        assert!(!descriptor.matches_query("pricing"));
    }
}

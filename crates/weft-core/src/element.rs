// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render tree produced by resolution and consumed by the host runtime.
//!
//! A [`Node`] either describes host output directly (`Host`, `Text`,
//! `Fragment`) or defers to an implementation (`Component`) or to a by-name
//! lookup (`Named`). The loader expands the deferred forms.

use serde::{Deserialize, Serialize};

use crate::traits::component::ComponentRef;
use crate::types::{ProjectId, Props, props_to_json};

/// Options controlling how a named render is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Select among same-named components from different projects.
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Skip registered overrides and render the generated original.
    #[serde(default)]
    pub force_original: bool,
}

impl RenderOptions {
    pub fn for_project(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            force_original: false,
        }
    }

    pub fn original() -> Self {
        Self {
            project_id: None,
            force_original: true,
        }
    }
}

/// A host element such as `input` or `div`.
#[derive(Debug, Clone, PartialEq)]
pub struct HostElement {
    pub tag: String,
    pub props: Props,
    pub children: Vec<Node>,
}

/// An implementation instantiated with props.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentElement {
    pub component: ComponentRef,
    pub props: Props,
    pub children: Vec<Node>,
}

/// A request to render a component by name, resolved at expansion time.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRender {
    pub name: String,
    pub options: RenderOptions,
    pub props: Props,
}

/// A node in the render tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    Text(String),
    Fragment(Vec<Node>),
    Host(HostElement),
    Component(ComponentElement),
    Named(NamedRender),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn host(tag: impl Into<String>, props: Props) -> Self {
        Node::Host(HostElement {
            tag: tag.into(),
            props,
            children: Vec::new(),
        })
    }

    pub fn component(component: ComponentRef, props: Props) -> Self {
        Node::Component(ComponentElement {
            component,
            props,
            children: Vec::new(),
        })
    }

    pub fn named(name: impl Into<String>, options: RenderOptions, props: Props) -> Self {
        Node::Named(NamedRender {
            name: name.into(),
            options,
            props,
        })
    }

    /// Replace the children of a host or component node.
    ///
    /// Other node kinds have no children and are returned unchanged.
    pub fn with_children(mut self, new_children: Vec<Node>) -> Self {
        match &mut self {
            Node::Host(el) => el.children = new_children,
            Node::Component(el) => el.children = new_children,
            _ => {}
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Child nodes, not including node-valued props.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Fragment(children) => children,
            Node::Host(el) => &el.children,
            Node::Component(el) => &el.children,
            _ => &[],
        }
    }

    /// JSON rendering of the tree for inspection and snapshotting.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{json, Value};

        fn children_json(children: &[Node]) -> Value {
            Value::Array(children.iter().map(Node::to_json).collect())
        }

        match self {
            Node::Empty => Value::Null,
            Node::Text(text) => Value::String(text.clone()),
            Node::Fragment(children) => children_json(children),
            Node::Host(el) => {
                let mut out = json!({ "type": el.tag, "props": props_to_json(&el.props) });
                if !el.children.is_empty() {
                    out["children"] = children_json(&el.children);
                }
                out
            }
            Node::Component(el) => {
                let mut out = json!({
                    "component": el.component.display_name(),
                    "props": props_to_json(&el.props),
                });
                if !el.children.is_empty() {
                    out["children"] = children_json(&el.children);
                }
                out
            }
            Node::Named(el) => json!({
                "named": el.name,
                "projectId": el.options.project_id.as_ref().map(ProjectId::as_str),
                "forceOriginal": el.options.force_original,
                "props": props_to_json(&el.props),
            }),
        }
    }
}

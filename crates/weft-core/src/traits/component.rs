// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The component trait and its shared handle.

use std::fmt;
use std::sync::Arc;

use crate::element::Node;
use crate::error::WeftError;
use crate::types::Props;

/// A renderable component authored in the host application.
///
/// Implementations are registered once and shared for the lifetime of the
/// registry, so they must be `Send + Sync`.
pub trait Component: Send + Sync + 'static {
    /// Human-readable name used in logs and tree dumps.
    fn display_name(&self) -> &str;

    /// Render the component with the given props and children.
    fn render(&self, props: &Props, children: &[Node]) -> Result<Node, WeftError>;
}

/// Shared handle to a component implementation.
///
/// Two handles are equal when they point at the same implementation instance.
#[derive(Clone)]
pub struct ComponentRef(Arc<dyn Component>);

impl ComponentRef {
    pub fn new(component: impl Component) -> Self {
        Self(Arc::new(component))
    }

    pub fn from_arc(component: Arc<dyn Component>) -> Self {
        Self(component)
    }

    pub fn display_name(&self) -> &str {
        self.0.display_name()
    }

    pub fn render(&self, props: &Props, children: &[Node]) -> Result<Node, WeftError> {
        self.0.render(props, children)
    }

    pub fn ptr_eq(&self, other: &ComponentRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef")
            .field(&self.display_name())
            .finish()
    }
}

/// A component backed by a closure.
pub struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> FnComponent<F>
where
    F: Fn(&Props, &[Node]) -> Result<Node, WeftError> + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }

    /// Wrap the closure directly into a shared [`ComponentRef`].
    pub fn shared(name: impl Into<String>, render: F) -> ComponentRef {
        ComponentRef::new(Self::new(name, render))
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(&Props, &[Node]) -> Result<Node, WeftError> + Send + Sync + 'static,
{
    fn display_name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props, children: &[Node]) -> Result<Node, WeftError> {
        (self.render)(props, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_refs_compare_by_identity() {
        let a = FnComponent::shared("A", |_, _| Ok(Node::Empty));
        let b = FnComponent::shared("A", |_, _| Ok(Node::Empty));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn fn_component_renders_closure() {
        let c = FnComponent::shared("Label", |props, _| {
            let text = props.get("text").and_then(|v| v.as_str()).unwrap_or("");
            Ok(Node::text(text))
        });
        let mut props = Props::new();
        props.insert("text".into(), "hello".into());
        assert_eq!(c.render(&props, &[]).unwrap(), Node::text("hello"));
        assert_eq!(format!("{c:?}"), "ComponentRef(\"Label\")");
    }
}

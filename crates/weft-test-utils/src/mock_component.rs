// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock component implementation for deterministic render tests.

use std::sync::{Arc, Mutex, PoisonError};

use weft_core::{Component, ComponentRef, Node, Props, WeftError};

/// One recorded call to [`Component::render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub props: Props,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone)]
enum Output {
    /// A host element tagged with the component name, carrying the props
    /// and children it was rendered with.
    Echo,
    Fixed(Node),
    Passthrough,
}

/// A component that records its renders.
#[derive(Debug)]
pub struct MockComponent {
    name: String,
    output: Output,
    calls: Mutex<Vec<RenderCall>>,
}

impl MockComponent {
    fn build(name: impl Into<String>, output: Output) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            output,
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Renders `<name ...props>children</name>`.
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Self::build(name, Output::Echo)
    }

    /// Always renders `node`.
    pub fn with_output(name: impl Into<String>, node: Node) -> Arc<Self> {
        Self::build(name, Output::Fixed(node))
    }

    /// Renders its children as a fragment, like an environment provider.
    pub fn passthrough(name: impl Into<String>) -> Arc<Self> {
        Self::build(name, Output::Passthrough)
    }

    /// A shared handle to this mock for registration.
    pub fn component_ref(self: &Arc<Self>) -> ComponentRef {
        ComponentRef::from_arc(Arc::clone(self) as Arc<dyn Component>)
    }

    pub fn render_count(&self) -> usize {
        self.lock().len()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.lock().clone()
    }

    pub fn last_props(&self) -> Option<Props> {
        self.lock().last().map(|call| call.props.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<RenderCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Component for MockComponent {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props, children: &[Node]) -> Result<Node, WeftError> {
        self.lock().push(RenderCall {
            props: props.clone(),
            children: children.to_vec(),
        });
        Ok(match &self.output {
            Output::Echo => Node::host(self.name.clone(), props.clone()).with_children(children.to_vec()),
            Output::Fixed(node) => node.clone(),
            Output::Passthrough => Node::Fragment(children.to_vec()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_render() {
        let mock = MockComponent::new("Btn");
        let component = mock.component_ref();
        let mut props = Props::new();
        props.insert("label".into(), "Go".into());

        let out = component.render(&props, &[Node::text("x")]).unwrap();
        assert_eq!(out.to_json()["type"], "Btn");
        assert_eq!(mock.render_count(), 1);
        assert_eq!(mock.last_props(), Some(props));
        assert_eq!(mock.calls()[0].children, vec![Node::text("x")]);
    }

    #[test]
    fn passthrough_renders_children() {
        let mock = MockComponent::passthrough("Provider");
        let out = mock.render(&Props::new(), &[Node::text("a")]).unwrap();
        assert_eq!(out, Node::Fragment(vec![Node::text("a")]));
    }

    #[test]
    fn handles_to_one_mock_are_equal() {
        let mock = MockComponent::with_output("Fixed", Node::Empty);
        assert_eq!(mock.component_ref(), mock.component_ref());
        assert_eq!(mock.component_ref().display_name(), "Fixed");
    }
}

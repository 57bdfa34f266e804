// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end render tests.
//!
//! `TestHarness` assembles a registry, a set of generated originals, and a
//! loader whose environment provider is a [`MockComponent`], so tests can
//! count how many times the provider was rendered.

use std::sync::Arc;

use weft_core::{Node, ProjectId, Props, RenderOptions, WeftError};
use weft_loader::{render_tree, ComponentLoader, GeneratedComponents};
use weft_registry::{ComponentMeta, Registry};

use crate::mock_component::MockComponent;

/// Builder for creating test environments with configurable registrations.
pub struct TestHarnessBuilder {
    overrides: Vec<(Arc<MockComponent>, ComponentMeta)>,
    originals: Vec<(Option<ProjectId>, String, Arc<MockComponent>)>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            overrides: Vec::new(),
            originals: Vec::new(),
        }
    }

    /// Register `component` as the override for `meta.name`.
    pub fn with_override(mut self, component: Arc<MockComponent>, meta: ComponentMeta) -> Self {
        self.overrides.push((component, meta));
        self
    }

    /// Add a generated original.
    pub fn with_original(
        mut self,
        project_id: Option<&str>,
        name: &str,
        component: Arc<MockComponent>,
    ) -> Self {
        self.originals
            .push((project_id.map(ProjectId::from), name.to_string(), component));
        self
    }

    /// Build the harness, registering everything in insertion order.
    pub fn build(self) -> TestHarness {
        let registry = Arc::new(Registry::new());
        for (component, meta) in self.overrides {
            registry.register_component(component.component_ref(), meta);
        }

        let originals = Arc::new(GeneratedComponents::new());
        for (project_id, name, component) in self.originals {
            originals.insert(project_id, name, component.component_ref());
        }

        let root_provider = MockComponent::passthrough("RootProvider");
        let loader = ComponentLoader::new(Arc::clone(&registry), originals.clone())
            .with_root_provider(root_provider.component_ref());

        TestHarness {
            registry,
            originals,
            root_provider,
            loader,
        }
    }
}

/// A loader wired to mock components.
pub struct TestHarness {
    /// Registry of overrides shared with the loader.
    pub registry: Arc<Registry>,
    /// Generated originals shared with the loader.
    pub originals: Arc<GeneratedComponents>,
    /// Environment provider; renders its children unchanged.
    pub root_provider: Arc<MockComponent>,
    pub loader: ComponentLoader,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Render and fully expand `name` from a fresh root.
    pub fn render(
        &self,
        name: &str,
        options: &RenderOptions,
        props: Props,
    ) -> Result<Option<Node>, WeftError> {
        let root = self.loader.root();
        render_tree(&root, name, options, props)
    }
}

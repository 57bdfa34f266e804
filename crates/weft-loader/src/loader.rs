// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The component loader: a registry, a source of originals, and the
//! environment provider supplied by the rendering runtime.

use std::fmt;
use std::sync::Arc;

use weft_core::{ComponentRef, FnComponent, Node};
use weft_registry::{ComponentMeta, ContextMeta, Registry};

use crate::lookup::Lookup;
use crate::original::{GeneratedComponents, OriginalSource};
use crate::scope::LoaderRoot;

/// Default environment provider: renders its children unchanged.
pub fn passthrough_provider() -> ComponentRef {
    FnComponent::shared("RootProvider", |_, children| {
        Ok(Node::Fragment(children.to_vec()))
    })
}

/// Owns everything needed to resolve named renders.
///
/// The registry is injected so that several loaders, or a loader and the
/// design tooling, can share one set of registrations.
#[derive(Clone)]
pub struct ComponentLoader {
    registry: Arc<Registry>,
    originals: Arc<dyn OriginalSource>,
    root_provider: ComponentRef,
}

impl ComponentLoader {
    /// Create a loader over `registry` and `originals` with the passthrough
    /// environment provider.
    pub fn new(registry: Arc<Registry>, originals: Arc<dyn OriginalSource>) -> Self {
        Self {
            registry,
            originals,
            root_provider: passthrough_provider(),
        }
    }

    /// A loader with a fresh registry and no originals.
    pub fn empty() -> Self {
        Self::new(
            Arc::new(Registry::new()),
            Arc::new(GeneratedComponents::new()),
        )
    }

    /// Replace the environment provider wrapped around root renders.
    pub fn with_root_provider(mut self, provider: ComponentRef) -> Self {
        self.root_provider = provider;
        self
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    pub fn register_component(&self, component: ComponentRef, meta: ComponentMeta) {
        self.registry.register_component(component, meta);
    }

    pub fn register_context(&self, component: ComponentRef, meta: ContextMeta) {
        self.registry.register_context(component, meta);
    }

    pub fn get_lookup(&self) -> Lookup {
        Lookup::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.originals),
            self.root_provider.clone(),
        )
    }

    /// Establish the root boundary that named renders require.
    pub fn root(&self) -> LoaderRoot {
        LoaderRoot::new(self.get_lookup())
    }
}

impl fmt::Debug for ComponentLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentLoader")
            .field("registry", &self.registry)
            .field("root_provider", &self.root_provider)
            .finish_non_exhaustive()
    }
}

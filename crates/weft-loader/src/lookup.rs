// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution of component names to implementations.
//!
//! A registered override wins over the generated original unless the caller
//! forces the original. Resolution only reads the registry and the original
//! source, so it is deterministic for a fixed snapshot of both.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use weft_core::{ComponentRef, ProjectId};
use weft_registry::Registry;

use crate::original::OriginalSource;

/// Options for a single resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Skip registered overrides and return the generated original.
    pub force_original: bool,
}

/// Read-only view of a loader used to resolve named renders.
#[derive(Clone)]
pub struct Lookup {
    registry: Arc<Registry>,
    originals: Arc<dyn OriginalSource>,
    root_provider: ComponentRef,
}

impl Lookup {
    pub(crate) fn new(
        registry: Arc<Registry>,
        originals: Arc<dyn OriginalSource>,
        root_provider: ComponentRef,
    ) -> Self {
        Self {
            registry,
            originals,
            root_provider,
        }
    }

    /// Resolve `name` to an implementation.
    ///
    /// Returns `None` when neither a registered override nor an original
    /// exists; callers render nothing in that case.
    pub fn resolve(
        &self,
        name: &str,
        project_id: Option<&ProjectId>,
        options: ResolveOptions,
    ) -> Option<ComponentRef> {
        if name.is_empty() {
            debug!("empty component name resolves to nothing");
            return None;
        }

        if !options.force_original
            && let Some(entry) = self.registry.find_component(name, project_id)
        {
            debug!(
                component = name,
                project = project_id.map(ProjectId::as_str),
                implementation = entry.component.display_name(),
                "resolved registered component"
            );
            return Some(entry.component);
        }

        let original = self.originals.original(name, project_id);
        match &original {
            Some(component) => debug!(
                component = name,
                project = project_id.map(ProjectId::as_str),
                implementation = component.display_name(),
                forced = options.force_original,
                "resolved generated original"
            ),
            None => debug!(
                component = name,
                project = project_id.map(ProjectId::as_str),
                forced = options.force_original,
                "no component found"
            ),
        }
        original
    }

    /// The environment provider wrapped around the root-most render.
    pub fn root_provider(&self) -> ComponentRef {
        self.root_provider.clone()
    }
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookup")
            .field("registry", &self.registry.len())
            .field("root_provider", &self.root_provider)
            .finish()
    }
}

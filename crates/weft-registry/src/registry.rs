// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registry of host-application components and contexts.
//!
//! The `Registry` keeps two insertion-ordered sequences of
//! (implementation, descriptor) pairs. It is append-only: entries are never
//! removed or replaced, and a later registration with the same name shadows
//! earlier ones at lookup time.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tracing::{debug, trace};
use weft_core::{ComponentRef, ProjectId};

use crate::descriptor::{ComponentMeta, ContextMeta};

/// A registered component and its descriptor.
#[derive(Debug, Clone)]
pub struct ComponentRegistration {
    pub component: ComponentRef,
    pub meta: Arc<ComponentMeta>,
}

/// A registered context and its descriptor.
#[derive(Debug, Clone)]
pub struct ContextRegistration {
    pub component: ComponentRef,
    pub meta: Arc<ContextMeta>,
}

/// How closely a registration's scope matches a requested scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScopeMatch {
    /// The registration is unscoped.
    Unscoped,
    /// The registration is scoped to exactly the requested project.
    Exact,
}

/// Rank a registration scope against a requested scope.
///
/// Returns `None` when the registration belongs to a different project, or
/// when it is scoped and the request is not.
pub fn scope_match(registered: Option<&ProjectId>, requested: Option<&ProjectId>) -> Option<ScopeMatch> {
    match (registered, requested) {
        (None, _) => Some(ScopeMatch::Unscoped),
        (Some(r), Some(q)) if r == q => Some(ScopeMatch::Exact),
        _ => None,
    }
}

/// Registry of components and contexts.
///
/// All methods take `&self`; share the registry behind an `Arc` to register
/// from several initialization paths, including concurrently.
#[derive(Debug, Default)]
pub struct Registry {
    components: RwLock<Vec<ComponentRegistration>>,
    contexts: RwLock<Vec<ContextRegistration>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component registration.
    ///
    /// Descriptors are not validated here; see [`crate::validate`].
    pub fn register_component(&self, component: ComponentRef, meta: ComponentMeta) {
        debug!(
            name = %meta.name,
            project = meta.project_id.as_ref().map(ProjectId::as_str),
            implementation = component.display_name(),
            "registered component"
        );
        self.components
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ComponentRegistration {
                component,
                meta: Arc::new(meta),
            });
    }

    /// Append a context registration.
    pub fn register_context(&self, component: ComponentRef, meta: ContextMeta) {
        debug!(
            name = %meta.name,
            implementation = component.display_name(),
            "registered context"
        );
        self.contexts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ContextRegistration {
                component,
                meta: Arc::new(meta),
            });
    }

    /// Snapshot of all component registrations in registration order.
    pub fn components(&self) -> Vec<ComponentRegistration> {
        self.read_components().clone()
    }

    /// Snapshot of all context registrations in registration order.
    pub fn contexts(&self) -> Vec<ContextRegistration> {
        self.contexts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Find the component registration that best matches `name` and `scope`.
    ///
    /// An exact scope match beats an unscoped registration; registrations for
    /// other projects are never returned. Among equally specific matches the
    /// last registered wins.
    pub fn find_component(
        &self,
        name: &str,
        scope: Option<&ProjectId>,
    ) -> Option<ComponentRegistration> {
        let components = self.read_components();
        let mut best: Option<(ScopeMatch, &ComponentRegistration)> = None;

        // Scan from the end so the first hit at a given rank is the latest one.
        for entry in components.iter().rev().filter(|e| e.meta.name == name) {
            let Some(rank) = scope_match(entry.meta.project_id.as_ref(), scope) else {
                trace!(name, project = ?entry.meta.project_id, "skipping registration for other project");
                continue;
            };
            if best.is_none_or(|(best_rank, _)| rank > best_rank) {
                best = Some((rank, entry));
            }
            if rank == ScopeMatch::Exact {
                break;
            }
        }

        best.map(|(_, entry)| entry.clone())
    }

    /// Find the latest context registration named `name`.
    pub fn find_context(&self, name: &str) -> Option<ContextRegistration> {
        self.contexts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .rev()
            .find(|e| e.meta.name == name)
            .cloned()
    }

    /// Returns the total number of component and context registrations.
    pub fn len(&self) -> usize {
        self.read_components().len()
            + self
                .contexts
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Entries are only ever appended, so a poisoned lock still guards a
    // consistent sequence.
    fn read_components(&self) -> RwLockReadGuard<'_, Vec<ComponentRegistration>> {
        self.components
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

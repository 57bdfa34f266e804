// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sources of generated ("original") component implementations.
//!
//! Originals come from outside the host application: generated code or
//! bundles fetched by the data layer. The loader falls back to them when no
//! registered override matches.

use std::sync::{PoisonError, RwLock};

use weft_core::{ComponentRef, ProjectId};
use weft_registry::ScopeMatch;

/// Provides generated implementations by name.
pub trait OriginalSource: Send + Sync {
    /// Look up the generated implementation of `name`.
    ///
    /// With a `project_id`, only that project's component (or a project-less
    /// one) may be returned. Without one, any project's component matches.
    fn original(&self, name: &str, project_id: Option<&ProjectId>) -> Option<ComponentRef>;
}

#[derive(Debug, Clone)]
struct GeneratedEntry {
    project_id: Option<ProjectId>,
    name: String,
    component: ComponentRef,
}

/// In-memory set of generated components, keyed by project and name.
///
/// Later insertions shadow earlier ones with the same key.
#[derive(Debug, Default)]
pub struct GeneratedComponents {
    entries: RwLock<Vec<GeneratedEntry>>,
}

impl GeneratedComponents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generated component, optionally belonging to a project.
    pub fn insert(
        &self,
        project_id: Option<ProjectId>,
        name: impl Into<String>,
        component: ComponentRef,
    ) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(GeneratedEntry {
                project_id,
                name: name.into(),
                component,
            });
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn original_rank(entry: Option<&ProjectId>, requested: Option<&ProjectId>) -> Option<ScopeMatch> {
    match (entry, requested) {
        (Some(e), Some(q)) if e == q => Some(ScopeMatch::Exact),
        (Some(_), Some(_)) => None,
        _ => Some(ScopeMatch::Unscoped),
    }
}

impl OriginalSource for GeneratedComponents {
    fn original(&self, name: &str, project_id: Option<&ProjectId>) -> Option<ComponentRef> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .rev()
            .filter(|e| e.name == name)
            .filter_map(|e| original_rank(e.project_id.as_ref(), project_id).map(|rank| (rank, e)))
            // Newest first; only a strictly better rank replaces the pick.
            .fold(None::<(ScopeMatch, &GeneratedEntry)>, |best, (rank, e)| match best {
                Some((best_rank, _)) if best_rank >= rank => best,
                _ => Some((rank, e)),
            })
            .map(|(_, e)| e.component.clone())
    }
}

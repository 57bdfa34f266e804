// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Root boundary and per-tree render scope.
//!
//! The environment provider must wrap the tree exactly once, at the root-most
//! resolved render, and only once the data needed to render is available.
//! Wrapping any higher would remount the whole tree when data arrives and lose
//! transient UI state. A [`RenderScope`] records whether a resolved render
//! above has already claimed the root. It is a plain value passed down the
//! render calls, so independent trees never share claim state.

use crate::lookup::Lookup;

/// The root boundary that named renders require.
#[derive(Debug, Clone)]
pub struct LoaderRoot {
    lookup: Lookup,
}

impl LoaderRoot {
    pub(crate) fn new(lookup: Lookup) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    /// A fresh, unclaimed scope for a new render tree under this root.
    pub fn scope(&self) -> RenderScope<'_> {
        RenderScope {
            root: Some(self),
            claimed: false,
        }
    }
}

/// Render state threaded through one render tree.
#[derive(Debug, Clone, Copy)]
pub struct RenderScope<'a> {
    root: Option<&'a LoaderRoot>,
    claimed: bool,
}

impl RenderScope<'static> {
    /// A scope outside any root boundary. Rendering through it fails.
    pub fn detached() -> Self {
        RenderScope {
            root: None,
            claimed: false,
        }
    }
}

impl<'a> RenderScope<'a> {
    pub fn root(&self) -> Option<&'a LoaderRoot> {
        self.root
    }

    /// True iff no enclosing resolved render has claimed the root.
    pub fn is_root_render(&self) -> bool {
        !self.claimed
    }

    /// The scope seen by everything beneath a resolved render.
    pub fn claimed(self) -> Self {
        Self {
            claimed: true,
            ..self
        }
    }
}

// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Re-bindable references to mounted host elements.
//!
//! An [`ElementRef`] is a shared slot that the host runtime rebinds every
//! time it mounts the element a primitive forwarded the ref to. Every clone
//! of the ref sees the rebinding immediately. The slot holds a weak
//! reference, so it never keeps an unmounted element alive.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

/// A host element as mounted by the rendering runtime.
pub trait MountedElement: Send + Sync {
    fn tag(&self) -> &str;
    fn focus(&self);
    fn blur(&self);
}

/// A shared, re-bindable reference to a mounted element.
#[derive(Clone, Default)]
pub struct ElementRef {
    slot: Arc<RwLock<Option<Weak<dyn MountedElement>>>>,
}

impl ElementRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the ref at a newly mounted element.
    pub fn bind(&self, element: &Arc<dyn MountedElement>) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::downgrade(element));
    }

    /// Clear the ref when its element unmounts.
    pub fn unbind(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The currently mounted element, if it is still alive.
    pub fn current(&self) -> Option<Arc<dyn MountedElement>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// True when both refs share one slot.
    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl PartialEq for ElementRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current() {
            Some(el) => f.debug_tuple("ElementRef").field(&el.tag()).finish(),
            None => f.write_str("ElementRef(<unmounted>)"),
        }
    }
}

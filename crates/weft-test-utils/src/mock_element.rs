// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock mounted element for imperative handle tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use weft_primitives::{ElementRef, MountedElement};

/// A mounted element that counts focus and blur calls.
#[derive(Debug)]
pub struct MockElement {
    tag: String,
    focus_calls: AtomicUsize,
    blur_calls: AtomicUsize,
}

impl MockElement {
    pub fn new(tag: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            tag: tag.into(),
            focus_calls: AtomicUsize::new(0),
            blur_calls: AtomicUsize::new(0),
        })
    }

    /// Bind `element_ref` to this element, as the runtime does on mount.
    pub fn mount(self: &Arc<Self>, element_ref: &ElementRef) {
        let mounted: Arc<dyn MountedElement> = Arc::clone(self) as Arc<dyn MountedElement>;
        element_ref.bind(&mounted);
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls.load(Ordering::SeqCst)
    }

    pub fn blur_calls(&self) -> usize {
        self.blur_calls.load(Ordering::SeqCst)
    }

    /// True when `element` is this very element.
    pub fn is(self: &Arc<Self>, element: &Arc<dyn MountedElement>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(self), Arc::as_ptr(element))
    }
}

impl MountedElement for MockElement {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn focus(&self) {
        self.focus_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn blur(&self) {
        self.blur_calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_binds_the_ref() {
        let element = MockElement::new("input");
        let element_ref = ElementRef::new();
        element.mount(&element_ref);

        let current = element_ref.current().unwrap();
        assert!(element.is(&current));
        current.focus();
        current.blur();
        current.blur();
        assert_eq!(element.focus_calls(), 1);
        assert_eq!(element.blur_calls(), 2);
    }
}

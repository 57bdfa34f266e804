// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Weft integration tests.
//!
//! Provides mock components, mock mounted elements, and a harness that
//! assembles a loader with an observable environment provider.
//!
//! # Components
//!
//! - [`MockComponent`] - Component implementation that records every render
//! - [`MockElement`] - Mounted element that counts focus and blur calls
//! - [`TestHarness`] - Registry, originals, and loader wired together

pub mod fixtures;
pub mod harness;
pub mod mock_component;
pub mod mock_element;

pub use harness::TestHarness;
pub use mock_component::{MockComponent, RenderCall};
pub use mock_element::MockElement;

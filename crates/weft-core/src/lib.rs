// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Weft component host.
//!
//! This crate provides the error type, prop values, render tree, and the
//! [`Component`] trait shared by the registry, the loader, and the
//! composite primitives.

pub mod element;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use element::{ComponentElement, HostElement, NamedRender, Node, RenderOptions};
pub use error::WeftError;
pub use traits::{Component, ComponentRef, FnComponent};
pub use types::{ProjectId, PropValue, Props, props_from_json, props_to_json};

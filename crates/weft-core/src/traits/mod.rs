// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions implemented by host-application components.

pub mod component;

pub use component::{Component, ComponentRef, FnComponent};

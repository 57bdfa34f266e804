// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconciliation of caller props for composite primitives.
//!
//! A primitive sits between a caller and a generated class. The caller passes
//! semantic props (`isDisabled`, `startIcon`, ...); the class expects variant
//! selections, args, and per-element overrides. This crate performs that
//! translation so that every caller prop lands in exactly one place.

pub mod class;
pub mod handle;
pub mod text_input;
pub mod variants;

pub use class::{ClassSpec, GeneratedClass};
pub use handle::{ElementRef, MountedElement};
pub use text_input::{
    use_text_input, BaseTextInputProps, Override, Overrides, PrimitiveProps, TextInput,
    TextInputConfig, TextInputHandle, TextInputRefs, TEXT_INPUT_PROPS,
};
pub use variants::{merge_variant_toggles, omit, pick, toggles_to_props, VariantDef, VariantToggle};

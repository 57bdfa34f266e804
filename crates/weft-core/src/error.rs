// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Weft component host.

use thiserror::Error;

/// The primary error type used across registration, resolution, and rendering.
///
/// A component that cannot be found is not an error: resolution yields `None`
/// and the render region stays empty.
#[derive(Debug, Error)]
pub enum WeftError {
    /// A named render was attempted without an enclosing root boundary.
    #[error(
        "cannot render `{component}`: no root provider in scope. \
         Create a LoaderRoot with `ComponentLoader::root()` at the root of your app \
         and render through its scope"
    )]
    MissingRoot { component: String },

    /// Descriptor manifest or configuration errors (invalid TOML, empty names).
    #[error("configuration error: {0}")]
    Config(String),

    /// A component implementation failed while rendering.
    #[error("render error in {component}: {message}")]
    Render { component: String, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WeftError {
    /// Returns true for usage errors that must halt the whole render.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, WeftError::MissingRoot { .. })
    }
}

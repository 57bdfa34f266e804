// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The generated class a primitive renders through.

use serde::{Deserialize, Serialize};

/// Prop names a generated class handles internally.
///
/// Caller props with these names feed the class's variants or args directly
/// and are never forwarded to host elements.
pub trait GeneratedClass {
    fn internal_variant_props(&self) -> &[String];
    fn internal_arg_props(&self) -> &[String];
}

/// A generated class described by data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    #[serde(default)]
    pub internal_variant_props: Vec<String>,
    #[serde(default)]
    pub internal_arg_props: Vec<String>,
}

impl ClassSpec {
    pub fn new<V, A>(variant_props: V, arg_props: A) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            internal_variant_props: variant_props.into_iter().map(Into::into).collect(),
            internal_arg_props: arg_props.into_iter().map(Into::into).collect(),
        }
    }
}

impl GeneratedClass for ClassSpec {
    fn internal_variant_props(&self) -> &[String] {
        &self.internal_variant_props
    }

    fn internal_arg_props(&self) -> &[String] {
        &self.internal_arg_props
    }
}

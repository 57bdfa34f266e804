// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Component and context registry for the Weft component host.
//!
//! Host applications register their components and contexts together with a
//! descriptor: a name, import hints for code generation, and a typed schema
//! for each editable prop. The loader reads the registry to resolve named
//! renders; design tooling reads it to drive its prop editors.

pub mod catalog;
pub mod descriptor;
pub mod manifest;
pub mod prop;
pub mod registry;
pub mod validate;

pub use catalog::{builtin_catalog, register_switch, search_catalog, switch_meta};
pub use descriptor::{ComponentMeta, ContextMeta, Descriptor};
pub use manifest::{load_descriptor_manifest, parse_descriptor_manifest, DescriptorManifest};
pub use prop::{PropSchema, PropType, PropTypeCategory};
pub use registry::{
    scope_match, ComponentRegistration, ContextRegistration, Registry, ScopeMatch,
};
pub use validate::{validate_descriptor, DescriptorIssue};

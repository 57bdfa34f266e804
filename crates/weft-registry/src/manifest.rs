// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor manifest parsing from TOML files.
//!
//! A manifest holds exactly one `[component]` or `[context]` table. Prop
//! schemas live in `[component.props.<prop>]` sub-tables, and the optional
//! `[component.prop_types]` table declares the runtime type category of each
//! prop for the authoring check in [`crate::validate`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use weft_core::WeftError;

use crate::descriptor::{ComponentMeta, ContextMeta, Descriptor};
use crate::prop::PropTypeCategory;

/// A parsed descriptor manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorManifest {
    pub descriptor: Descriptor,
    /// Declared runtime type categories, keyed by prop name.
    pub prop_types: BTreeMap<String, PropTypeCategory>,
}

/// Intermediate TOML deserialization struct for a manifest file.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    component: Option<ComponentSection>,
    context: Option<ContextSection>,
}

#[derive(Debug, Deserialize)]
struct ComponentSection {
    #[serde(flatten)]
    meta: ComponentMeta,
    #[serde(default)]
    prop_types: BTreeMap<String, PropTypeCategory>,
}

#[derive(Debug, Deserialize)]
struct ContextSection {
    #[serde(flatten)]
    meta: ContextMeta,
    #[serde(default)]
    prop_types: BTreeMap<String, PropTypeCategory>,
}

/// Parse a descriptor manifest from TOML content.
///
/// Rejects manifests with neither or both of `[component]` and `[context]`,
/// an empty `name`, or an empty `import_path`.
pub fn parse_descriptor_manifest(toml_content: &str) -> Result<DescriptorManifest, WeftError> {
    let file: ManifestFile = toml::from_str(toml_content)
        .map_err(|e| WeftError::Config(format!("invalid descriptor manifest: {e}")))?;

    let manifest = match (file.component, file.context) {
        (Some(section), None) => DescriptorManifest {
            descriptor: Descriptor::Component(section.meta),
            prop_types: section.prop_types,
        },
        (None, Some(section)) => DescriptorManifest {
            descriptor: Descriptor::Context(section.meta),
            prop_types: section.prop_types,
        },
        (Some(_), Some(_)) => {
            return Err(WeftError::Config(
                "descriptor manifest: expected one of [component] or [context], found both"
                    .to_string(),
            ));
        }
        (None, None) => {
            return Err(WeftError::Config(
                "descriptor manifest: missing [component] or [context] table".to_string(),
            ));
        }
    };

    if manifest.descriptor.name().trim().is_empty() {
        return Err(WeftError::Config(
            "descriptor manifest: name must not be empty".to_string(),
        ));
    }

    if manifest.descriptor.import_path().trim().is_empty() {
        return Err(WeftError::Config(
            "descriptor manifest: import_path must not be empty".to_string(),
        ));
    }

    Ok(manifest)
}

/// Read and parse a descriptor manifest from disk.
pub fn load_descriptor_manifest(path: &Path) -> Result<DescriptorManifest, WeftError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WeftError::Config(format!(
            "cannot read descriptor manifest {}: {e}",
            path.display()
        ))
    })?;
    parse_descriptor_manifest(&content)
}

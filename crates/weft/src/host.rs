// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptor loading and the preview loader used by `weft render`.

use tracing::{debug, info, warn};
use weft_config::model::RegistryConfig;
use weft_core::{Component, ComponentRef, Node, Props, WeftError};
use weft_loader::ComponentLoader;
use weft_registry::{builtin_catalog, load_descriptor_manifest, validate_descriptor, Descriptor};

/// Stand-in implementation that renders a host element named after the
/// descriptor's import name.
#[derive(Debug)]
pub struct PreviewComponent {
    name: String,
    tag: String,
}

impl PreviewComponent {
    pub fn for_descriptor(descriptor: &Descriptor) -> Self {
        Self {
            name: format!("Preview({})", descriptor.name()),
            tag: descriptor.import_name().to_string(),
        }
    }
}

impl Component for PreviewComponent {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn render(&self, props: &Props, children: &[Node]) -> Result<Node, WeftError> {
        Ok(Node::host(self.tag.clone(), props.clone()).with_children(children.to_vec()))
    }
}

/// Builtin descriptors (when enabled) followed by every configured manifest.
///
/// Authoring issues are logged and do not stop loading; unreadable or
/// malformed manifests do.
pub fn load_descriptors(config: &RegistryConfig) -> Result<Vec<Descriptor>, WeftError> {
    let mut descriptors = Vec::new();
    if config.include_builtin_catalog {
        descriptors.extend(builtin_catalog().into_iter().map(Descriptor::Component));
    }

    for path in &config.manifests {
        let manifest = load_descriptor_manifest(path)?;
        if let Err(issues) = validate_descriptor(&manifest.descriptor, &manifest.prop_types) {
            for issue in issues {
                warn!(manifest = %path.display(), %issue, "descriptor authoring issue");
            }
        }
        debug!(manifest = %path.display(), name = manifest.descriptor.name(), "loaded descriptor manifest");
        descriptors.push(manifest.descriptor);
    }

    Ok(descriptors)
}

/// A loader with a [`PreviewComponent`] registered under every descriptor.
pub fn preview_loader(descriptors: &[Descriptor]) -> ComponentLoader {
    let loader = ComponentLoader::empty();
    for descriptor in descriptors {
        let preview = ComponentRef::new(PreviewComponent::for_descriptor(descriptor));
        match descriptor {
            Descriptor::Component(meta) => loader.register_component(preview, meta.clone()),
            Descriptor::Context(meta) => loader.register_context(preview, meta.clone()),
        }
    }
    info!(descriptors = descriptors.len(), "preview registry ready");
    loader
}

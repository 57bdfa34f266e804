// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Weft component host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use weft_core::{ProjectId, RenderOptions};

/// Top-level Weft configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeftConfig {
    /// Component resolution defaults.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Descriptor sources for the registry.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WeftConfig {
    /// Render options implied by the `[loader]` section.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            project_id: self
                .loader
                .default_project_id
                .as_deref()
                .map(ProjectId::from),
            force_original: self.loader.force_original,
        }
    }
}

/// Component resolution defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Project scope applied to renders that do not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project_id: Option<String>,

    /// Skip registered overrides and render generated originals.
    #[serde(default)]
    pub force_original: bool,
}

/// Descriptor sources for the registry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default = "default_true")]
    pub include_builtin_catalog: bool,

    /// Descriptor manifest files loaded at startup.
    #[serde(default)]
    pub manifests: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin_catalog: true,
            manifests: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WeftConfig::default();
        assert!(config.registry.include_builtin_catalog);
        assert!(config.registry.manifests.is_empty());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn render_options_follow_loader_section() {
        let config = WeftConfig {
            loader: LoaderConfig {
                default_project_id: Some("p1".into()),
                force_original: true,
            },
            ..WeftConfig::default()
        };
        let options = config.render_options();
        assert_eq!(options.project_id, Some(ProjectId::from("p1")));
        assert!(options.force_original);
    }
}

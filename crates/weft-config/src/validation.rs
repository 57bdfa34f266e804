// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::WeftConfig;

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &WeftConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
        errors.push(ConfigError::validation(format!(
            "logging.level `{}` must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if let Some(project) = &config.loader.default_project_id
        && project.trim().is_empty()
    {
        errors.push(ConfigError::validation(
            "loader.default_project_id must not be empty when set",
        ));
    }

    let mut seen = HashSet::new();
    for path in &config.registry.manifests {
        if path.as_os_str().is_empty() {
            errors.push(ConfigError::validation(
                "registry.manifests entries must not be empty",
            ));
        } else if !seen.insert(path) {
            errors.push(ConfigError::validation(format!(
                "registry.manifests lists `{}` more than once",
                path.display()
            )));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

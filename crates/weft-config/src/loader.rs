// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./weft.toml` > `~/.config/weft/weft.toml` > `/etc/weft/weft.toml`
//! with environment variable overrides via `WEFT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::WeftConfig;

pub(crate) const SYSTEM_CONFIG: &str = "/etc/weft/weft.toml";
pub(crate) const LOCAL_CONFIG: &str = "weft.toml";

pub(crate) fn user_config() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("weft/weft.toml"))
        .unwrap_or_default()
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/weft/weft.toml` (system-wide)
/// 3. `~/.config/weft/weft.toml` (user XDG config)
/// 4. `./weft.toml` (local directory)
/// 5. `WEFT_*` environment variables
pub fn load_config() -> Result<WeftConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<WeftConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WeftConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
///
/// Unlike the XDG hierarchy, the file must exist.
pub fn load_config_from_path(path: &Path) -> Result<WeftConfig, figment::Error> {
    if !path.is_file() {
        return Err(figment::Error::from(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    Figment::new()
        .merge(Serialized::defaults(WeftConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WeftConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config()))
        .merge(Toml::file(LOCAL_CONFIG))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// Only the first underscore after the section name becomes a dot, so
/// `WEFT_LOADER_DEFAULT_PROJECT_ID` maps to `loader.default_project_id`.
/// Keys reach the mapping with their original case.
fn env_provider() -> Env {
    Env::prefixed("WEFT_").map(|key| {
        let lowered = key.as_str().to_ascii_lowercase();
        let key_str = lowered.as_str();
        let mapped = ["loader_", "registry_", "logging_"]
            .iter()
            .find_map(|section| {
                key_str
                    .strip_prefix(section)
                    .map(|rest| format!("{}.{rest}", section.trim_end_matches('_')))
            })
            .unwrap_or_else(|| key_str.to_string());
        mapped.into()
    })
}

// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `weft catalog` command implementation.

use std::io::IsTerminal;

use colored::Colorize;
use serde::Serialize;
use weft_config::WeftConfig;
use weft_core::WeftError;
use weft_registry::Descriptor;

use crate::host::load_descriptors;

/// One catalog row for `--json` output.
#[derive(Debug, Serialize, PartialEq)]
pub struct CatalogEntry {
    pub kind: &'static str,
    pub name: String,
    pub display_name: String,
    pub import_path: String,
    pub import_name: String,
    pub props: Vec<String>,
}

impl From<&Descriptor> for CatalogEntry {
    fn from(descriptor: &Descriptor) -> Self {
        Self {
            kind: descriptor.kind(),
            name: descriptor.name().to_string(),
            display_name: descriptor.display_name().to_string(),
            import_path: descriptor.import_path().to_string(),
            import_name: descriptor.import_name().to_string(),
            props: descriptor.props().keys().cloned().collect(),
        }
    }
}

/// Descriptors whose name, display name, or import path contains `query`,
/// ignoring case. An empty query matches everything.
pub fn filter_descriptors<'a>(descriptors: &'a [Descriptor], query: &str) -> Vec<&'a Descriptor> {
    descriptors.iter().filter(|d| d.matches_query(query)).collect()
}

/// Run the `weft catalog` command.
pub fn run_catalog(
    config: &WeftConfig,
    query: Option<&str>,
    json: bool,
    plain: bool,
) -> Result<(), WeftError> {
    let descriptors = load_descriptors(&config.registry)?;
    let matches = filter_descriptors(&descriptors, query.unwrap_or(""));

    if json {
        let entries: Vec<CatalogEntry> = matches.into_iter().map(CatalogEntry::from).collect();
        let out = serde_json::to_string_pretty(&entries)
            .map_err(|e| WeftError::Internal(format!("failed to encode catalog: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    if matches.is_empty() {
        println!("no descriptors match");
        return Ok(());
    }

    let use_color = !plain && std::io::stdout().is_terminal();
    for descriptor in matches {
        let name = if use_color {
            descriptor.name().bold().to_string()
        } else {
            descriptor.name().to_string()
        };
        println!(
            "{name} ({}) {} from {}",
            descriptor.kind(),
            descriptor.import_name(),
            descriptor.import_path()
        );
        for (prop, schema) in descriptor.props() {
            println!("  {prop}: {}", schema.ty.tag());
        }
    }
    Ok(())
}

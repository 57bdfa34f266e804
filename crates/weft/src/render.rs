// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `weft render` command implementation.
//!
//! Renders one named component through a preview loader and prints the
//! expanded tree as JSON.

use tracing::info;
use weft_config::WeftConfig;
use weft_core::{props_from_json, Node, ProjectId, RenderOptions, WeftError};
use weft_loader::render_tree;

use crate::host::{load_descriptors, preview_loader};

/// Command-line overrides for a single render.
#[derive(Debug, Default)]
pub struct RenderArgs<'a> {
    pub name: &'a str,
    pub project: Option<&'a str>,
    pub force_original: bool,
    pub props: Option<&'a str>,
}

/// Render options from configuration, overridden by the command line.
pub fn render_options(config: &WeftConfig, args: &RenderArgs<'_>) -> RenderOptions {
    let mut options = config.render_options();
    if let Some(project) = args.project {
        options.project_id = Some(ProjectId::from(project));
    }
    options.force_original |= args.force_original;
    options
}

/// Render `args.name` and return the expanded tree, or `None` when no
/// component resolves.
pub fn render_named(config: &WeftConfig, args: &RenderArgs<'_>) -> Result<Option<Node>, WeftError> {
    let props = match args.props {
        Some(raw) => {
            let value = serde_json::from_str(raw)
                .map_err(|e| WeftError::Config(format!("--props is not valid JSON: {e}")))?;
            props_from_json(value)?
        }
        None => Default::default(),
    };

    let loader = preview_loader(&load_descriptors(&config.registry)?);
    let options = render_options(config, args);
    let root = loader.root();
    let tree = render_tree(&root, args.name, &options, props)?;
    info!(component = args.name, found = tree.is_some(), "render finished");
    Ok(tree)
}

/// Run the `weft render` command. Returns whether a component rendered.
pub fn run_render(config: &WeftConfig, args: &RenderArgs<'_>) -> Result<bool, WeftError> {
    match render_named(config, args)? {
        Some(tree) => {
            let out = serde_json::to_string_pretty(&tree.to_json())
                .map_err(|e| WeftError::Internal(format!("failed to encode tree: {e}")))?;
            println!("{out}");
            Ok(true)
        }
        None => {
            eprintln!("weft: no component named `{}`", args.name);
            Ok(false)
        }
    }
}

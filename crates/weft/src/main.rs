// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weft - component registry and loader tooling.
//!
//! This is the binary entry point: it browses the descriptor catalog,
//! checks descriptor manifests, and previews named renders.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod catalog;
mod check;
mod host;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use weft_config::WeftConfig;
use weft_core::WeftError;

/// Weft - component registry and loader tooling.
#[derive(Parser, Debug)]
#[command(name = "weft", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List builtin and configured descriptors.
    Catalog {
        /// Filter by name, display name, or import path.
        query: Option<String>,
        /// Print descriptors as JSON.
        #[arg(long)]
        json: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Validate a descriptor manifest.
    Check {
        manifest: PathBuf,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Render a named component with preview implementations.
    Render {
        name: String,
        /// Project scope for the render.
        #[arg(long)]
        project: Option<String>,
        /// Render the generated original, skipping overrides.
        #[arg(long)]
        force_original: bool,
        /// Props as a JSON object.
        #[arg(long)]
        props: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => weft_config::load_and_validate_path(path),
        None => weft_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            weft_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match run(&cli.command, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, usage = e.is_usage_error(), "command failed");
            eprintln!("weft: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands, config: &WeftConfig) -> Result<bool, WeftError> {
    match command {
        Commands::Catalog { query, json, plain } => {
            catalog::run_catalog(config, query.as_deref(), *json, *plain)?;
            Ok(true)
        }
        Commands::Check { manifest, plain } => check::run_check(manifest, *plain),
        Commands::Render {
            name,
            project,
            force_original,
            props,
        } => render::run_render(
            config,
            &render::RenderArgs {
                name,
                project: project.as_deref(),
                force_original: *force_original,
                props: props.as_deref(),
            },
        ),
    }
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("weft={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::parse_from([
            "weft",
            "render",
            "MyButton",
            "--project",
            "p1",
            "--force-original",
            "--props",
            r#"{"label":"Go"}"#,
        ]);
        let Commands::Render {
            name,
            project,
            force_original,
            props,
        } = cli.command
        else {
            panic!("expected render command");
        };
        assert_eq!(name, "MyButton");
        assert_eq!(project.as_deref(), Some("p1"));
        assert!(force_original);
        assert_eq!(props.as_deref(), Some(r#"{"label":"Go"}"#));
    }

    #[test]
    fn default_config_renders_catalog() {
        assert!(run(
            &Commands::Catalog {
                query: Some("switch".into()),
                json: true,
                plain: true,
            },
            &WeftConfig::default(),
        )
        .unwrap());
    }
}

// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `weft check` command implementation.
//!
//! Parses a descriptor manifest, runs the authoring validator, and renders
//! each issue as a miette diagnostic pointing into the manifest.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::Path;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;
use weft_core::WeftError;
use weft_registry::{parse_descriptor_manifest, validate_descriptor, DescriptorIssue};

/// An authoring issue located in its manifest.
#[derive(Debug, Error, Diagnostic)]
#[error("{issue}")]
#[diagnostic(code(weft::manifest::authoring))]
pub struct ManifestIssue {
    pub issue: DescriptorIssue,
    #[label("declared here")]
    pub span: Option<SourceSpan>,
    #[source_code]
    pub src: NamedSource<String>,
}

/// Check the manifest text, returning every issue found.
pub fn check_manifest(name: &str, content: &str) -> Result<Vec<ManifestIssue>, WeftError> {
    let manifest = parse_descriptor_manifest(content)?;
    let issues = match validate_descriptor(&manifest.descriptor, &manifest.prop_types) {
        Ok(()) => return Ok(Vec::new()),
        Err(issues) => issues,
    };

    Ok(issues
        .into_iter()
        .map(|issue| ManifestIssue {
            span: issue_span(content, &issue),
            issue,
            src: NamedSource::new(name, content.to_string()),
        })
        .collect())
}

// Points at the prop's table header, or at `name` for descriptor-level issues.
fn issue_span(content: &str, issue: &DescriptorIssue) -> Option<SourceSpan> {
    let prop = match issue {
        DescriptorIssue::EmptyName => None,
        DescriptorIssue::MissingUncontrolledProp { prop }
        | DescriptorIssue::UncontrolledWithoutEditOnly { prop }
        | DescriptorIssue::EmptyChoiceOptions { prop }
        | DescriptorIssue::IncompatibleType { prop, .. }
        | DescriptorIssue::UnknownPropType { prop } => Some(prop.as_str()),
    };

    match prop {
        Some(prop) => {
            let needle = format!(".props.{prop}]");
            content
                .find(&needle)
                .map(|at| SourceSpan::new((at + ".props.".len()).into(), prop.len()))
        }
        None => content
            .split_inclusive('\n')
            .scan(0usize, |offset, line| {
                let start = *offset;
                *offset += line.len();
                Some((start, line.trim_end_matches(['\r', '\n'])))
            })
            .find(|(_, line)| line.trim_start().starts_with("name"))
            .map(|(start, line)| SourceSpan::new(start.into(), line.len())),
    }
}

/// Run the `weft check` command. Returns whether the manifest is clean.
pub fn run_check(path: &Path, plain: bool) -> Result<bool, WeftError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        WeftError::Config(format!(
            "cannot read descriptor manifest {}: {e}",
            path.display()
        ))
    })?;
    let issues = check_manifest(&path.display().to_string(), &content)?;

    if issues.is_empty() {
        println!("{}: ok", path.display());
        return Ok(true);
    }

    let handler = if plain {
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
    } else {
        GraphicalReportHandler::new()
    };
    for issue in &issues {
        let mut buf = String::new();
        if handler.render_report(&mut buf, issue).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {issue}");
        }
    }
    eprintln!("{}: {} issue(s)", path.display(), issues.len());
    Ok(false)
}

// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authoring-time descriptor checks.
//!
//! Registration never validates descriptors. These checks run in tooling
//! (`weft check`) before a descriptor ships, and collect every issue instead
//! of failing fast.

use std::collections::BTreeMap;
use std::fmt;

use crate::descriptor::Descriptor;
use crate::prop::{PropType, PropTypeCategory};

/// A single problem found in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorIssue {
    EmptyName,
    /// `edit_only` is set but no `uncontrolled_prop` is named.
    MissingUncontrolledProp { prop: String },
    /// `uncontrolled_prop` is named but `edit_only` is not set.
    UncontrolledWithoutEditOnly { prop: String },
    EmptyChoiceOptions { prop: String },
    /// The schema tag cannot describe a prop of the declared runtime type.
    IncompatibleType {
        prop: String,
        tag: &'static str,
        category: PropTypeCategory,
    },
    /// A runtime type was declared for a prop the descriptor has no schema for.
    UnknownPropType { prop: String },
}

impl fmt::Display for DescriptorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorIssue::EmptyName => write!(f, "name must not be empty"),
            DescriptorIssue::MissingUncontrolledProp { prop } => {
                write!(f, "prop `{prop}` is edit_only but names no uncontrolled_prop")
            }
            DescriptorIssue::UncontrolledWithoutEditOnly { prop } => write!(
                f,
                "prop `{prop}` names an uncontrolled_prop but is not edit_only"
            ),
            DescriptorIssue::EmptyChoiceOptions { prop } => {
                write!(f, "choice prop `{prop}` has no options")
            }
            DescriptorIssue::IncompatibleType {
                prop,
                tag,
                category,
            } => write!(
                f,
                "prop `{prop}` is a {category} at runtime and cannot use the `{tag}` type"
            ),
            DescriptorIssue::UnknownPropType { prop } => {
                write!(f, "prop_types declares `{prop}`, which has no schema")
            }
        }
    }
}

/// Check a descriptor against its declared runtime prop types.
///
/// Props without a declared category are only checked structurally.
pub fn validate_descriptor(
    descriptor: &Descriptor,
    prop_types: &BTreeMap<String, PropTypeCategory>,
) -> Result<(), Vec<DescriptorIssue>> {
    let mut issues = Vec::new();

    if descriptor.name().trim().is_empty() {
        issues.push(DescriptorIssue::EmptyName);
    }

    for (prop, schema) in descriptor.props() {
        if schema.edit_only && schema.uncontrolled_prop.is_none() {
            issues.push(DescriptorIssue::MissingUncontrolledProp { prop: prop.clone() });
        }
        if !schema.edit_only && schema.uncontrolled_prop.is_some() {
            issues.push(DescriptorIssue::UncontrolledWithoutEditOnly { prop: prop.clone() });
        }
        if let PropType::Choice { options, .. } = &schema.ty
            && options.is_empty()
        {
            issues.push(DescriptorIssue::EmptyChoiceOptions { prop: prop.clone() });
        }
        if let Some(category) = prop_types.get(prop)
            && !category.accepts(&schema.ty)
        {
            issues.push(DescriptorIssue::IncompatibleType {
                prop: prop.clone(),
                tag: schema.ty.tag(),
                category: *category,
            });
        }
    }

    for prop in prop_types.keys() {
        if !descriptor.props().contains_key(prop) {
            issues.push(DescriptorIssue::UnknownPropType { prop: prop.clone() });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

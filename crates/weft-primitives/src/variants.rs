// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variant toggles and prop selection helpers shared by primitives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use weft_core::{PropValue, Props};

/// A single variant within a variant group of a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantDef {
    pub group: String,
    pub variant: String,
}

impl VariantDef {
    pub fn new(group: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            variant: variant.into(),
        }
    }
}

/// A semantic flag mapped to a variant that may not be configured.
#[derive(Debug, Clone, Copy)]
pub struct VariantToggle<'a> {
    pub def: Option<&'a VariantDef>,
    /// The caller's flag. `None` is inactive.
    pub active: Option<bool>,
}

/// Merge toggles into `{group: {variant: active}}`.
///
/// Toggles without a configured variant are dropped. Toggles that share a
/// group land in the same group map; a later toggle for the same variant
/// overwrites an earlier one.
pub fn merge_variant_toggles(toggles: &[VariantToggle<'_>]) -> BTreeMap<String, BTreeMap<String, bool>> {
    let mut groups: BTreeMap<String, BTreeMap<String, bool>> = BTreeMap::new();
    for toggle in toggles {
        let Some(def) = toggle.def else { continue };
        groups
            .entry(def.group.clone())
            .or_default()
            .insert(def.variant.clone(), toggle.active.unwrap_or(false));
    }
    groups
}

/// Convert merged toggles into variant prop values.
pub fn toggles_to_props(groups: BTreeMap<String, BTreeMap<String, bool>>) -> Props {
    groups
        .into_iter()
        .map(|(group, variants)| {
            let object = variants
                .into_iter()
                .map(|(variant, active)| (variant, serde_json::Value::Bool(active)))
                .collect();
            (group, PropValue::Json(serde_json::Value::Object(object)))
        })
        .collect()
}

/// The subset of `props` whose keys are in `keys`.
pub fn pick<S: AsRef<str>>(props: &Props, keys: &[S]) -> Props {
    keys.iter()
        .filter_map(|k| {
            let k = k.as_ref();
            props.get(k).map(|v| (k.to_string(), v.clone()))
        })
        .collect()
}

/// `props` without any of `keys`.
pub fn omit<S: AsRef<str>>(props: &Props, keys: &[S]) -> Props {
    props
        .iter()
        .filter(|(k, _)| !keys.iter().any(|key| key.as_ref() == k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

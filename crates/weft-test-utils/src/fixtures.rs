// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures.

use weft_primitives::{ClassSpec, TextInputConfig, VariantDef};

/// A text input config with every variant and slot configured.
pub fn text_input_config() -> TextInputConfig {
    TextInputConfig {
        show_start_icon_variant: VariantDef::new("withIcons", "withStartIcon"),
        show_end_icon_variant: Some(VariantDef::new("withIcons", "withEndIcon")),
        is_disabled_variant: Some(VariantDef::new("isDisabled", "isDisabled")),
        start_icon_slot: Some("startIcon".into()),
        end_icon_slot: Some("endIcon".into()),
        root: "root".into(),
        input: "input".into(),
    }
}

/// A generated text input class with a `color` variant group and a
/// `label` arg.
pub fn text_input_class() -> ClassSpec {
    ClassSpec::new(["color", "withIcons", "isDisabled"], ["label"])
}

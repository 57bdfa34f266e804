// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The text-input primitive.
//!
//! [`use_text_input`] turns caller props into the variants, args, and
//! per-element overrides of a generated text-input class. The class declares
//! which prop names it handles internally; the [`TextInputConfig`] maps the
//! primitive's semantic flags and slots onto the class's variants and args.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::trace;
use weft_core::{Node, PropValue, Props};

use crate::class::GeneratedClass;
use crate::handle::{ElementRef, MountedElement};
use crate::variants::{merge_variant_toggles, omit, pick, toggles_to_props, VariantDef, VariantToggle};

/// Caller props the text input consumes itself.
pub const TEXT_INPUT_PROPS: [&str; 9] = [
    "showStartIcon",
    "showEndIcon",
    "startIcon",
    "endIcon",
    "isDisabled",
    "className",
    "style",
    "inputClassName",
    "inputStyle",
];

/// Maps the primitive's behaviors onto a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputConfig {
    pub show_start_icon_variant: VariantDef,
    #[serde(default)]
    pub show_end_icon_variant: Option<VariantDef>,
    #[serde(default)]
    pub is_disabled_variant: Option<VariantDef>,
    #[serde(default)]
    pub start_icon_slot: Option<String>,
    #[serde(default)]
    pub end_icon_slot: Option<String>,
    /// Override key of the root element.
    pub root: String,
    /// Override key of the native input element.
    pub input: String,
}

/// The caller props the text input understands, split from the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseTextInputProps {
    pub show_start_icon: Option<bool>,
    pub show_end_icon: Option<bool>,
    pub start_icon: Option<PropValue>,
    pub end_icon: Option<PropValue>,
    pub is_disabled: Option<bool>,
    pub class_name: Option<PropValue>,
    pub style: Option<PropValue>,
    pub input_class_name: Option<PropValue>,
    pub input_style: Option<PropValue>,
    /// Everything else, forwarded to the input element.
    pub rest: Props,
}

impl BaseTextInputProps {
    pub fn from_props(props: &Props) -> Self {
        let flag = |key: &str| props.get(key).and_then(PropValue::as_bool);
        let value = |key: &str| props.get(key).cloned();
        Self {
            show_start_icon: flag("showStartIcon"),
            show_end_icon: flag("showEndIcon"),
            start_icon: value("startIcon"),
            end_icon: value("endIcon"),
            is_disabled: flag("isDisabled"),
            class_name: value("className"),
            style: value("style"),
            input_class_name: value("inputClassName"),
            input_style: value("inputStyle"),
            rest: omit(props, &TEXT_INPUT_PROPS),
        }
    }
}

/// Props and element ref applied to one element of the generated class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Override {
    pub props: Props,
    pub element_ref: Option<ElementRef>,
}

/// Overrides keyed by element name.
pub type Overrides = BTreeMap<String, Override>;

/// Everything the generated class needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveProps {
    pub variants: Props,
    pub args: Props,
    pub overrides: Overrides,
}

/// Element refs owned by one text-input instance.
///
/// Keep one `TextInputRefs` per mounted instance and pass it to every
/// [`use_text_input`] call; the refs, and any handle made from them, survive
/// re-renders.
#[derive(Debug, Clone, Default)]
pub struct TextInputRefs {
    root: ElementRef,
    input: ElementRef,
}

impl TextInputRefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_ref(&self) -> &ElementRef {
        &self.root
    }

    pub fn input_ref(&self) -> &ElementRef {
        &self.input
    }

    /// The imperative handle exposed to the caller.
    pub fn handle(&self) -> TextInputHandle {
        TextInputHandle {
            root: self.root.clone(),
            input: self.input.clone(),
        }
    }
}

/// Imperative handle over a mounted text input.
///
/// Always acts on the most recently mounted elements.
#[derive(Debug, Clone)]
pub struct TextInputHandle {
    root: ElementRef,
    input: ElementRef,
}

impl TextInputHandle {
    pub fn focus(&self) {
        if let Some(input) = self.input.current() {
            input.focus();
        }
    }

    pub fn blur(&self) {
        if let Some(input) = self.input.current() {
            input.blur();
        }
    }

    pub fn get_root(&self) -> Option<Arc<dyn MountedElement>> {
        self.root.current()
    }

    pub fn get_input(&self) -> Option<Arc<dyn MountedElement>> {
        self.input.current()
    }
}

/// Result of reconciling a text input's props.
#[derive(Debug, Clone)]
pub struct TextInput {
    pub props: PrimitiveProps,
    pub handle: TextInputHandle,
}

/// Reconcile caller props for a text input rendered through `class`.
pub fn use_text_input<C>(
    class: &C,
    props: &Props,
    config: &TextInputConfig,
    refs: &TextInputRefs,
) -> TextInput
where
    C: GeneratedClass + ?Sized,
{
    let base = BaseTextInputProps::from_props(props);
    let variant_props = class.internal_variant_props();
    let arg_props = class.internal_arg_props();

    let mut variants = pick(props, variant_props);
    variants.extend(toggles_to_props(merge_variant_toggles(&[
        VariantToggle {
            def: Some(&config.show_start_icon_variant),
            active: base.show_start_icon,
        },
        VariantToggle {
            def: config.show_end_icon_variant.as_ref(),
            active: base.show_end_icon,
        },
        VariantToggle {
            def: config.is_disabled_variant.as_ref(),
            active: base.is_disabled,
        },
    ])));

    let mut args = pick(props, arg_props);
    if let Some(slot) = &config.start_icon_slot {
        args.insert(slot.clone(), slot_content(base.start_icon.as_ref()));
    }
    if let Some(slot) = &config.end_icon_slot {
        args.insert(slot.clone(), slot_content(base.end_icon.as_ref()));
    }

    let mut root_props = Props::new();
    insert_some(&mut root_props, "className", base.class_name);
    insert_some(&mut root_props, "style", base.style);

    let mut input_props = omit(&omit(&base.rest, arg_props), variant_props);
    input_props.insert(
        "disabled".to_string(),
        base.is_disabled.unwrap_or(false).into(),
    );
    insert_some(&mut input_props, "className", base.input_class_name);
    insert_some(&mut input_props, "style", base.input_style);

    let mut overrides = Overrides::new();
    overrides.insert(
        config.root.clone(),
        Override {
            props: root_props,
            element_ref: Some(refs.root.clone()),
        },
    );
    overrides.insert(
        config.input.clone(),
        Override {
            props: input_props,
            element_ref: Some(refs.input.clone()),
        },
    );

    trace!(
        variants = variants.len(),
        args = args.len(),
        forwarded = overrides[&config.input].props.len(),
        "reconciled text input props"
    );

    TextInput {
        props: PrimitiveProps {
            variants,
            args,
            overrides,
        },
        handle: refs.handle(),
    }
}

// A configured slot always gets a key, empty when the caller passed nothing.
fn slot_content(content: Option<&PropValue>) -> PropValue {
    content.cloned().unwrap_or(PropValue::Node(Node::Empty))
}

fn insert_some(props: &mut Props, key: &str, value: Option<PropValue>) {
    if let Some(value) = value {
        props.insert(key.to_string(), value);
    }
}

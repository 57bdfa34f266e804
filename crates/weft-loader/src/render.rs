// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Render entry point and tree expansion.
//!
//! [`render`] resolves one named component and returns it as an element,
//! wrapped in the environment provider when it is the root-most render.
//! [`expand`] walks a tree, rendering implementations and resolving nested
//! named renders with the claimed scope, until only host output remains.

use tracing::{debug, warn};
use weft_core::{Node, Props, PropValue, RenderOptions, WeftError};

use crate::lookup::ResolveOptions;
use crate::scope::{LoaderRoot, RenderScope};

/// Resolve and instantiate the component `name`.
///
/// Fails with [`WeftError::MissingRoot`] before resolving anything when the
/// scope has no root. Returns `Ok(None)` when nothing resolves.
pub fn render(
    scope: RenderScope<'_>,
    name: &str,
    options: &RenderOptions,
    props: Props,
) -> Result<Option<Node>, WeftError> {
    let Some(root) = scope.root() else {
        warn!(component = name, "render attempted without a root provider");
        return Err(WeftError::MissingRoot {
            component: name.to_string(),
        });
    };

    let lookup = root.lookup();
    let Some(component) = lookup.resolve(
        name,
        options.project_id.as_ref(),
        ResolveOptions {
            force_original: options.force_original,
        },
    ) else {
        return Ok(None);
    };

    let element = Node::component(component, props);

    if scope.is_root_render() {
        debug!(component = name, "wrapping root render in environment provider");
        let provider = lookup.root_provider();
        return Ok(Some(
            Node::component(provider, Props::new()).with_children(vec![element]),
        ));
    }

    Ok(Some(element))
}

/// Expand `node` until it contains only host, text, and fragment nodes.
pub fn expand(scope: RenderScope<'_>, node: Node) -> Result<Node, WeftError> {
    match node {
        Node::Empty | Node::Text(_) => Ok(node),
        Node::Fragment(children) => Ok(Node::Fragment(expand_all(scope, children)?)),
        Node::Host(mut el) => {
            el.props = expand_props(scope, el.props)?;
            el.children = expand_all(scope, el.children)?;
            Ok(Node::Host(el))
        }
        Node::Component(el) => {
            let rendered = el.component.render(&el.props, &el.children)?;
            expand(scope, rendered)
        }
        Node::Named(request) => {
            match render(scope, &request.name, &request.options, request.props)? {
                Some(resolved) => expand(scope.claimed(), resolved),
                None => Ok(Node::Empty),
            }
        }
    }
}

/// Render `name` as the root of a new tree under `root` and expand it.
pub fn render_tree(
    root: &LoaderRoot,
    name: &str,
    options: &RenderOptions,
    props: Props,
) -> Result<Option<Node>, WeftError> {
    let scope = root.scope();
    render(scope, name, options, props)?
        .map(|node| expand(scope.claimed(), node))
        .transpose()
}

fn expand_all(scope: RenderScope<'_>, nodes: Vec<Node>) -> Result<Vec<Node>, WeftError> {
    nodes.into_iter().map(|n| expand(scope, n)).collect()
}

// Slot content left on host elements is expanded in place.
fn expand_props(scope: RenderScope<'_>, props: Props) -> Result<Props, WeftError> {
    props
        .into_iter()
        .map(|(key, value)| match value {
            PropValue::Node(node) => Ok((key, PropValue::Node(expand(scope, node)?))),
            other => Ok((key, other)),
        })
        .collect()
}

// SPDX-FileCopyrightText: 2026 Weft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime resolution of named components for the Weft component host.
//!
//! A [`ComponentLoader`] combines the registry of host-application overrides
//! with a source of generated originals. Rendering starts from a
//! [`LoaderRoot`]: each named render is resolved through the [`Lookup`], and
//! the root-most one is wrapped in the environment provider.
//!
//! ```
//! use weft_core::{FnComponent, Node, Props, RenderOptions};
//! use weft_loader::{render_tree, ComponentLoader};
//! use weft_registry::ComponentMeta;
//!
//! let loader = ComponentLoader::empty();
//! loader.register_component(
//!     FnComponent::shared("Btn", |_, _| Ok(Node::host("button", Props::new()))),
//!     ComponentMeta::new("MyButton", "./Btn"),
//! );
//! let root = loader.root();
//! let tree = render_tree(&root, "MyButton", &RenderOptions::default(), Props::new())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(tree.to_json()[0]["type"], "button");
//! ```

pub mod loader;
pub mod lookup;
pub mod original;
pub mod render;
pub mod scope;

pub use loader::{passthrough_provider, ComponentLoader};
pub use lookup::{Lookup, ResolveOptions};
pub use original::{GeneratedComponents, OriginalSource};
pub use render::{expand, render, render_tree};
pub use scope::{LoaderRoot, RenderScope};

//! Typed HTML and SVG element sugar
//!
//! This module re-exports `tagtree-elements`: one constructor function per
//! element and the [`AttributeExt`] setters. Everything here builds a plain
//! [`Element`](crate::Element); no element has behavior of its own.
//!
//! ## Example
//!
//! ```rust
//! use tagtree::elements::*;
//! use tagtree::{Render, nodes, text};
//!
//! let card = div()
//! 	.classes(["card", "shadow"])
//! 	.children(nodes![h2().child("Title"), p().child(text("Body & more"))]);
//!
//! assert_eq!(
//! 	card.render_to_string().unwrap(),
//! 	r#"<div class="card shadow"><h2>Title</h2><p>Body &amp; more</p></div>"#
//! );
//! ```

pub use tagtree_elements::*;

//! # tagtree-core
//!
//! Node model and rendering engine for tagtree.
//!
//! A document is assembled from plain function calls into a tree of
//! [`Node`]s, then serialized in one synchronous depth-first pass into a
//! [`Sink`]. Nothing is rendered until [`render`] (or
//! [`Render::render_to_string`]) is called.
//!
//! ## Building blocks
//!
//! - **Leaves**: [`text`] (escaped), [`raw`] (verbatim), [`textf!`], [`rawf!`]
//! - **Combinators**: [`when`], [`when_else`], [`when_with`],
//!   [`when_else_with`], [`map`], [`group`]
//! - **Elements**: [`Element`] with [`Element::attribute`] and
//!   [`Element::attribute_if`]
//! - **Root**: [`Document`], which writes `<!DOCTYPE html>` first
//!
//! ## Escaping
//!
//! Text nodes are always escaped with [`escape_html`]. Raw nodes and
//! attribute values are written as given; the caller is responsible for
//! their safety.
//!
//! ## Example
//!
//! ```
//! use tagtree_core::{Element, Render, document, map, nodes, text, when};
//!
//! let items = vec!["one", "two"];
//! let doc = document(nodes![Element::new("ul", false, nodes![
//! 	map(items, |item| Element::new("li", false, nodes![text(*item)])),
//! 	when(false, Element::new("li", false, nodes!["hidden"])),
//! ])]);
//!
//! assert_eq!(
//! 	doc.render_to_string().unwrap(),
//! 	"<!DOCTYPE html><ul><li>one</li><li>two</li></ul>"
//! );
//! ```
//!
//! ## Threading
//!
//! Lazy branches and map transforms are stored as `Arc` closures bounded by
//! `Send + Sync`, so a built [`Node`] can be moved into a spawned task or
//! shared between threads. Rendering itself is synchronous.

pub mod attributes;
pub mod combinators;
pub mod document;
pub mod element;
pub mod error;
pub mod escape;
pub mod node;
pub mod render;
pub mod sink;

pub use attributes::Attributes;
pub use combinators::{
	Conditional, LazyConditional, Mapped, group, map, when, when_else, when_else_with, when_with,
};
pub use document::{DOCTYPE, Document, document};
pub use element::Element;
pub use error::{RenderError, RenderResult};
pub use escape::{escape_html, write_escaped};
pub use node::{IntoNode, Node, Render, empty, raw, text};
pub use render::{render, render_to_writer};
pub use sink::{FmtSink, IoSink, Sink};

//! # tagtree
//!
//! Build HTML with ordinary Rust function calls, conditionals and loops, then
//! render it to a string or any writer with untrusted text escaped.
//!
//! A page is plain data until it is rendered: builders assemble a tree of
//! [`Node`]s, and a single [`render`] call walks it once, depth-first,
//! writing each fragment into a [`Sink`]. The only error a render can
//! produce is a write failure from that sink.
//!
//! ## Feature Flags
//!
//! - `elements` (default) - typed constructors (`div()`, `img()`, ...) and
//!   attribute setters in [`elements`]
//!
//! ## Quick Example
//!
//! ```rust
//! use tagtree::prelude::*;
//!
//! struct User {
//! 	name: Option<String>,
//! }
//!
//! let users = vec![User { name: None }, User { name: Some("Ann".into()) }];
//!
//! let page = document(nodes![
//! 	html().lang("en").children(nodes![
//! 		head().child(title().child("Users")),
//! 		body().child(ul().child(map(users, |user| {
//! 			let name = user.name.clone();
//! 			li().child(when_else_with(
//! 				name.is_some(),
//! 				move || textf!("Hello {}", name.clone().unwrap_or_default()),
//! 				|| text("Hello anonymous"),
//! 			))
//! 		}))),
//! 	]),
//! ]);
//!
//! assert_eq!(
//! 	page.render_to_string().unwrap(),
//! 	"<!DOCTYPE html><html lang=\"en\"><head><title>Users</title></head>\
//! 	 <body><ul><li>Hello anonymous</li><li>Hello Ann</li></ul></body></html>"
//! );
//! ```

#[cfg(feature = "elements")]
pub mod elements;

// Re-export the node model and rendering engine
pub use tagtree_core::{
	Attributes, Conditional, DOCTYPE, Document, Element, FmtSink, IntoNode, IoSink,
	LazyConditional, Mapped, Node, Render, RenderError, RenderResult, Sink, document, empty,
	escape_html, group, map, raw, render, render_to_writer, text, when, when_else,
	when_else_with, when_with, write_escaped,
};
pub use tagtree_core::{nodes, rawf, textf};

/// Prelude module for convenient imports
///
/// Brings the builders, combinators, macros and (with the `elements`
/// feature) every element constructor and attribute setter into scope.
pub mod prelude {
	pub use crate::{
		Document, Element, IntoNode, Node, Render, RenderError, RenderResult, Sink, document,
		empty, group, map, nodes, raw, rawf, render, render_to_writer, text, textf, when,
		when_else, when_else_with, when_with,
	};

	#[cfg(feature = "elements")]
	pub use crate::elements::*;
}

//! Generic HTML element.
//!
//! [`Element`] is the one record behind every tag. Typed constructors such
//! as `div()` or `img()` only fill in the name and the void flag.
//!
//! ## Example
//!
//! ```
//! use tagtree_core::{Element, Render, nodes};
//!
//! let link = Element::new("a", false, nodes!["Home"])
//! 	.attribute("href", "/")
//! 	.attribute_if(false, "class", "active");
//! assert_eq!(link.render_to_string().unwrap(), r#"<a href="/">Home</a>"#);
//! ```

use std::borrow::Cow;

use crate::attributes::Attributes;
use crate::error::RenderResult;
use crate::node::{IntoNode, Node, Render, render_children};
use crate::sink::Sink;

/// A named element with attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
	/// The tag name (e.g., "div", "span").
	name: Cow<'static, str>,
	/// Whether this element self-closes and drops its children.
	is_void: bool,
	/// HTML attributes.
	attributes: Attributes,
	/// Child nodes.
	children: Vec<Node>,
}

impl Element {
	/// Creates an element with no attributes.
	pub fn new(
		name: impl Into<Cow<'static, str>>,
		is_void: bool,
		children: impl IntoIterator<Item = Node>,
	) -> Self {
		Self {
			name: name.into(),
			is_void,
			attributes: Attributes::new(),
			children: children.into_iter().collect(),
		}
	}

	/// Replaces all children.
	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
		self.children = children.into_iter().collect();
		self
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Sets an attribute.
	///
	/// An empty `value` leaves the element unchanged. Setting a key twice
	/// keeps the last value.
	pub fn attribute(
		mut self,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attributes.set(key.into(), value.into());
		self
	}

	/// Sets an attribute only when `condition` is true.
	pub fn attribute_if(
		self,
		condition: bool,
		key: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		if condition {
			self.attribute(key, value)
		} else {
			self
		}
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.name
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the child nodes.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}
}

impl Render for Element {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		sink.write_str("<")?;
		sink.write_str(&self.name)?;

		for (key, value) in self.attributes.iter() {
			sink.write_str(" ")?;
			sink.write_str(key)?;
			sink.write_str("=\"")?;
			sink.write_str(value)?;
			sink.write_str("\"")?;
		}

		if self.is_void {
			return sink.write_str("/>");
		}

		sink.write_str(">")?;
		render_children(&self.children, sink)?;
		sink.write_str("</")?;
		sink.write_str(&self.name)?;
		sink.write_str(">")
	}
}

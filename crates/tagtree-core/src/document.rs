//! Document root.

use crate::error::RenderResult;
use crate::node::{IntoNode, Node, Render, render_children};
use crate::sink::Sink;

/// Preamble written before the children of every [`Document`].
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// A complete HTML document.
///
/// Renders [`DOCTYPE`] followed by its children. Unlike an
/// [`Element`](crate::Element) it has no name and no attributes.
#[derive(Debug, Clone, Default)]
pub struct Document {
	children: Vec<Node>,
}

impl Document {
	/// Creates a document with the given top-level children.
	pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
		Self {
			children: children.into_iter().collect(),
		}
	}

	/// Replaces all top-level children.
	pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
		self.children = children.into_iter().collect();
		self
	}

	/// Appends a top-level child.
	pub fn child(mut self, child: impl IntoNode) -> Self {
		self.children.push(child.into_node());
		self
	}

	/// Returns the top-level children.
	pub fn child_nodes(&self) -> &[Node] {
		&self.children
	}
}

impl Render for Document {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		tracing::trace!(children = self.children.len(), "rendering document");
		sink.write_str(DOCTYPE)?;
		render_children(&self.children, sink)
	}
}

/// Creates a [`Document`].
pub fn document(children: impl IntoIterator<Item = Node>) -> Document {
	Document::new(children)
}

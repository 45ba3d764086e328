//! The [`Node`] tree and the [`Render`] contract.

use std::borrow::Cow;

use crate::combinators::{Conditional, LazyConditional, Mapped};
use crate::document::Document;
use crate::element::Element;
use crate::error::RenderResult;
use crate::escape::write_escaped;
use crate::sink::Sink;

/// Anything that can serialize itself into a [`Sink`].
pub trait Render {
	/// Writes the serialized form of `self` into `sink`.
	///
	/// Children are visited depth-first, left to right. The first sink
	/// error aborts the traversal and is returned as-is; whatever was
	/// written before it stays in the sink.
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()>;

	/// Renders into a fresh `String`.
	fn render_to_string(&self) -> RenderResult<String> {
		let mut output = String::new();
		self.render(&mut output)?;
		Ok(output)
	}
}

/// A node of the document tree.
///
/// Trees are plain data until rendered. Rendering never changes a node;
/// lazy branches and map transforms run again on every render.
#[derive(Debug, Clone)]
pub enum Node {
	/// Text, HTML-escaped on output.
	Text(Cow<'static, str>),
	/// Markup written verbatim. The caller vouches for its safety.
	Raw(Cow<'static, str>),
	/// A branch chosen from pre-built nodes.
	Conditional(Conditional),
	/// A branch whose node is built only when taken, at render time.
	LazyConditional(LazyConditional),
	/// One node per item of a collection.
	Mapped(Mapped),
	/// Siblings without a wrapping element.
	Group(Vec<Node>),
	/// A tagged element.
	Element(Element),
	/// A full document with its preamble.
	Document(Document),
	/// Renders nothing.
	Empty,
}

impl Render for Node {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		match self {
			Node::Text(content) => write_escaped(sink, content),
			Node::Raw(content) => sink.write_str(content),
			Node::Conditional(cond) => cond.render(sink),
			Node::LazyConditional(cond) => cond.render(sink),
			Node::Mapped(mapped) => mapped.render(sink),
			Node::Group(children) => render_children(children, sink),
			Node::Element(el) => el.render(sink),
			Node::Document(doc) => doc.render(sink),
			Node::Empty => Ok(()),
		}
	}
}

/// Renders a slice of nodes in order.
impl Render for [Node] {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		render_children(self, sink)
	}
}

/// Renders `children` in order, stopping at the first error.
pub(crate) fn render_children(children: &[Node], sink: &mut dyn Sink) -> RenderResult<()> {
	for child in children {
		child.render(sink)?;
	}
	Ok(())
}

/// Creates a text node. The content is escaped when rendered.
pub fn text(content: impl Into<Cow<'static, str>>) -> Node {
	Node::Text(content.into())
}

/// Creates a raw node. The content is written without escaping.
pub fn raw(content: impl Into<Cow<'static, str>>) -> Node {
	Node::Raw(content.into())
}

/// Creates a node that renders nothing.
pub fn empty() -> Node {
	Node::Empty
}

/// Conversion into a [`Node`].
///
/// Strings become escaped text, `None` and `()` become [`Node::Empty`],
/// vectors and tuples become groups.
pub trait IntoNode {
	/// Converts self into a Node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for Document {
	fn into_node(self) -> Node {
		Node::Document(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl IntoNode for Cow<'static, str> {
	fn into_node(self) -> Node {
		Node::Text(self)
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Empty,
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::Group(self.into_iter().map(IntoNode::into_node).collect())
	}
}

impl IntoNode for () {
	fn into_node(self) -> Node {
		Node::Empty
	}
}

// Tuple implementations for groups

impl<A: IntoNode, B: IntoNode> IntoNode for (A, B) {
	fn into_node(self) -> Node {
		Node::Group(vec![self.0.into_node(), self.1.into_node()])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode> IntoNode for (A, B, C) {
	fn into_node(self) -> Node {
		Node::Group(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
		])
	}
}

impl<A: IntoNode, B: IntoNode, C: IntoNode, D: IntoNode> IntoNode for (A, B, C, D) {
	fn into_node(self) -> Node {
		Node::Group(vec![
			self.0.into_node(),
			self.1.into_node(),
			self.2.into_node(),
			self.3.into_node(),
		])
	}
}

/// Builds a `Vec<Node>` from values of different [`IntoNode`] types.
///
/// ```
/// use tagtree_core::{nodes, raw, Element, Render};
///
/// let list = Element::new("p", false, nodes!["a ", raw("<br/>"), None::<&str>]);
/// assert_eq!(list.render_to_string().unwrap(), "<p>a <br/></p>");
/// ```
#[macro_export]
macro_rules! nodes {
	() => {
		::std::vec::Vec::<$crate::Node>::new()
	};
	($($child:expr),+ $(,)?) => {
		::std::vec![$($crate::IntoNode::into_node($child)),+]
	};
}

/// Creates an escaped text node from format arguments.
///
/// ```
/// use tagtree_core::{textf, Render};
///
/// let node = textf!("{} < {}", 1, 2);
/// assert_eq!(node.render_to_string().unwrap(), "1 &lt; 2");
/// ```
#[macro_export]
macro_rules! textf {
	($($arg:tt)*) => {
		$crate::Node::Text(::std::borrow::Cow::Owned(::std::format!($($arg)*)))
	};
}

/// Creates a raw node from format arguments. Nothing is escaped.
#[macro_export]
macro_rules! rawf {
	($($arg:tt)*) => {
		$crate::Node::Raw(::std::borrow::Cow::Owned(::std::format!($($arg)*)))
	};
}

//! Structural combinators: conditionals, mapping and grouping.
//!
//! | Combinator | Branch built | Branch rendered |
//! |------------|--------------|-----------------|
//! | [`when`] / [`when_else`] | by the caller, always | only the taken one |
//! | [`when_with`] / [`when_else_with`] | at render time, only the taken one | only the taken one |
//!
//! [`map`] turns a collection into one node per item at render time, and
//! [`group`] lets a function return several siblings as one node.

use std::fmt;
use std::sync::Arc;

use crate::error::RenderResult;
use crate::node::{IntoNode, Node, Render};
use crate::sink::Sink;

type Thunk = Arc<dyn Fn() -> Node + Send + Sync>;

/// Branch between pre-built nodes.
#[derive(Debug, Clone)]
pub struct Conditional {
	predicate: bool,
	then: Box<Node>,
	otherwise: Option<Box<Node>>,
}

impl Conditional {
	/// Returns the condition.
	pub fn predicate(&self) -> bool {
		self.predicate
	}
}

impl Render for Conditional {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		if self.predicate {
			return self.then.render(sink);
		}
		match &self.otherwise {
			Some(node) => node.render(sink),
			None => Ok(()),
		}
	}
}

/// Branch whose nodes are produced by closures at render time.
#[derive(Clone)]
pub struct LazyConditional {
	predicate: bool,
	then: Thunk,
	otherwise: Option<Thunk>,
}

impl LazyConditional {
	/// Returns the condition.
	pub fn predicate(&self) -> bool {
		self.predicate
	}
}

impl fmt::Debug for LazyConditional {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyConditional")
			.field("predicate", &self.predicate)
			.field("has_otherwise", &self.otherwise.is_some())
			.finish()
	}
}

impl Render for LazyConditional {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		let branch = if self.predicate {
			Some(&self.then)
		} else {
			self.otherwise.as_ref()
		};
		match branch {
			Some(thunk) => thunk().render(sink),
			None => Ok(()),
		}
	}
}

/// Renders every item of a collection through a transform.
trait EachItem: Send + Sync {
	fn render_each(&self, sink: &mut dyn Sink) -> RenderResult<()>;

	fn item_count(&self) -> usize;
}

struct MapItems<T, F> {
	items: Vec<T>,
	transform: F,
}

impl<T, F, N> EachItem for MapItems<T, F>
where
	T: Send + Sync,
	F: Fn(&T) -> N + Send + Sync,
	N: IntoNode,
{
	fn render_each(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		for item in &self.items {
			(self.transform)(item).into_node().render(sink)?;
		}
		Ok(())
	}

	fn item_count(&self) -> usize {
		self.items.len()
	}
}

/// One node per item, produced at render time.
#[derive(Clone)]
pub struct Mapped {
	inner: Arc<dyn EachItem>,
}

impl Mapped {
	/// Number of items.
	pub fn len(&self) -> usize {
		self.inner.item_count()
	}

	/// Returns `true` if there are no items.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Debug for Mapped {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Mapped").field("items", &self.len()).finish()
	}
}

impl Render for Mapped {
	fn render(&self, sink: &mut dyn Sink) -> RenderResult<()> {
		self.inner.render_each(sink)
	}
}

/// Renders `node` when `condition` is true, nothing otherwise.
pub fn when(condition: bool, node: impl IntoNode) -> Node {
	Node::Conditional(Conditional {
		predicate: condition,
		then: Box::new(node.into_node()),
		otherwise: None,
	})
}

/// Renders `then` when `condition` is true, `otherwise` when it is false.
pub fn when_else(condition: bool, then: impl IntoNode, otherwise: impl IntoNode) -> Node {
	Node::Conditional(Conditional {
		predicate: condition,
		then: Box::new(then.into_node()),
		otherwise: Some(Box::new(otherwise.into_node())),
	})
}

/// Lazy [`when`]: `then` is called at render time, and only if
/// `condition` is true.
///
/// # Example
///
/// ```
/// use tagtree_core::{Render, text, when_with};
///
/// let user: Option<&str> = None;
/// // `user.unwrap()` is never evaluated
/// let node = when_with(user.is_some(), move || text(user.unwrap()));
/// assert_eq!(node.render_to_string().unwrap(), "");
/// ```
pub fn when_with<F, N>(condition: bool, then: F) -> Node
where
	F: Fn() -> N + Send + Sync + 'static,
	N: IntoNode,
{
	Node::LazyConditional(LazyConditional {
		predicate: condition,
		then: Arc::new(move || then().into_node()),
		otherwise: None,
	})
}

/// Lazy [`when_else`]: only the closure of the taken branch is called, at
/// render time.
pub fn when_else_with<F, G, N, M>(condition: bool, then: F, otherwise: G) -> Node
where
	F: Fn() -> N + Send + Sync + 'static,
	G: Fn() -> M + Send + Sync + 'static,
	N: IntoNode,
	M: IntoNode,
{
	Node::LazyConditional(LazyConditional {
		predicate: condition,
		then: Arc::new(move || then().into_node()),
		otherwise: Some(Arc::new(move || otherwise().into_node())),
	})
}

/// Renders `transform(item)` for each item, in order.
///
/// The transform runs at render time, once per item. If an item's node
/// fails to render, the remaining items are not visited.
///
/// # Example
///
/// ```
/// use tagtree_core::{Element, Render, map, nodes};
///
/// let list = Element::new("ul", false, nodes![map(vec!["a", "b"], |item| {
/// 	Element::new("li", false, nodes![*item])
/// })]);
/// assert_eq!(list.render_to_string().unwrap(), "<ul><li>a</li><li>b</li></ul>");
/// ```
pub fn map<I, T, F, N>(items: I, transform: F) -> Node
where
	I: IntoIterator<Item = T>,
	T: Send + Sync + 'static,
	F: Fn(&T) -> N + Send + Sync + 'static,
	N: IntoNode,
{
	Node::Mapped(Mapped {
		inner: Arc::new(MapItems {
			items: items.into_iter().collect(),
			transform,
		}),
	})
}

/// Renders `children` in order with no wrapping markup.
pub fn group(children: impl IntoIterator<Item = Node>) -> Node {
	Node::Group(children.into_iter().collect())
}

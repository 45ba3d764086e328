//! Top-level render entry points.

use std::io;

use crate::error::RenderResult;
use crate::node::Render;
use crate::sink::{IoSink, Sink};

/// Renders `root` into `sink` in a single depth-first pass.
///
/// Returns the first error raised by the sink. Output written before the
/// failure is left in place; nothing is buffered or rolled back.
pub fn render<R: Render + ?Sized>(root: &R, sink: &mut dyn Sink) -> RenderResult<()> {
	let result = root.render(sink);
	match &result {
		Ok(()) => tracing::trace!("render complete"),
		Err(e) => tracing::trace!(error = %e, "render aborted"),
	}
	result
}

/// Renders `root` into an [`io::Write`].
///
/// # Example
///
/// ```
/// use tagtree_core::{render_to_writer, text};
///
/// let mut out = Vec::new();
/// render_to_writer(&text("a & b"), &mut out).unwrap();
/// assert_eq!(out, b"a &amp; b");
/// ```
pub fn render_to_writer<R, W>(root: &R, writer: W) -> RenderResult<()>
where
	R: Render + ?Sized,
	W: io::Write,
{
	let mut sink = IoSink::new(writer);
	render(root, &mut sink)
}

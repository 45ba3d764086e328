//! Integration test utilities for tagtree
//!
//! Shared sinks and helpers used by the integration suites.

use tagtree_core::{RenderError, RenderResult, Sink};

/// Sink that accepts a fixed number of writes, then fails every write.
#[derive(Debug, Default)]
pub struct QuotaSink {
	remaining: usize,
	written: String,
}

impl QuotaSink {
	/// Creates a sink that accepts `writes` calls before failing.
	pub fn new(writes: usize) -> Self {
		Self {
			remaining: writes,
			written: String::new(),
		}
	}

	/// Output accepted before the failure.
	pub fn written(&self) -> &str {
		&self.written
	}
}

impl Sink for QuotaSink {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		if self.remaining == 0 {
			return Err(RenderError::sink("write quota exhausted"));
		}
		self.remaining -= 1;
		self.written.push_str(s);
		Ok(())
	}
}

/// Sink that records every write call separately.
#[derive(Debug, Default)]
pub struct RecordingSink {
	pub writes: Vec<String>,
}

impl Sink for RecordingSink {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		self.writes.push(s.to_owned());
		Ok(())
	}
}

/// Reverses the five entities produced by `escape_html`.
///
/// `&amp;` is decoded last so that `&amp;lt;` comes back as `&lt;`.
pub fn unescape_html(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}

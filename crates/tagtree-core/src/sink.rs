//! Output sinks.
//!
//! A [`Sink`] is the destination every node writes its serialized fragment
//! into. Write failures are the only errors a render can produce.
//!
//! ## Provided sinks
//!
//! - `String` and `Vec<u8>`: in-memory buffers, never fail
//! - [`IoSink`]: adapts any [`std::io::Write`] (files, sockets, stdout)
//! - [`FmtSink`]: adapts any [`std::fmt::Write`] (e.g. a `Formatter`)

use crate::error::{RenderError, RenderResult};

/// Destination for rendered markup.
pub trait Sink {
	/// Appends `s` to the output.
	fn write_str(&mut self, s: &str) -> RenderResult<()>;
}

impl Sink for String {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		self.push_str(s);
		Ok(())
	}
}

impl Sink for Vec<u8> {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		self.extend_from_slice(s.as_bytes());
		Ok(())
	}
}

impl<S: Sink + ?Sized> Sink for &mut S {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		(**self).write_str(s)
	}
}

/// Sink over an [`std::io::Write`].
///
/// Writes are passed straight through; wrap the writer in a
/// `BufWriter` if it is unbuffered.
#[derive(Debug)]
pub struct IoSink<W> {
	inner: W,
}

impl<W: std::io::Write> IoSink<W> {
	/// Wraps a writer.
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Returns a reference to the wrapped writer.
	pub fn get_ref(&self) -> &W {
		&self.inner
	}

	/// Unwraps the sink, returning the writer.
	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: std::io::Write> Sink for IoSink<W> {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		self.inner.write_all(s.as_bytes()).map_err(|e| {
			tracing::debug!(error = %e, "io sink write failed");
			RenderError::Io(e)
		})
	}
}

/// Sink over an [`std::fmt::Write`].
#[derive(Debug)]
pub struct FmtSink<W> {
	inner: W,
}

impl<W: std::fmt::Write> FmtSink<W> {
	/// Wraps a formatter-like writer.
	pub fn new(inner: W) -> Self {
		Self { inner }
	}

	/// Unwraps the sink, returning the writer.
	pub fn into_inner(self) -> W {
		self.inner
	}
}

impl<W: std::fmt::Write> Sink for FmtSink<W> {
	fn write_str(&mut self, s: &str) -> RenderResult<()> {
		self.inner.write_str(s).map_err(|e| {
			tracing::debug!("fmt sink write failed");
			RenderError::Fmt(e)
		})
	}
}

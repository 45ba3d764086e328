//! Error types for rendering.

use thiserror::Error;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// A failure to write rendered output.
///
/// Building a tree never fails; every error originates from the sink that
/// receives the serialized markup and is propagated unchanged.
#[derive(Debug, Error)]
pub enum RenderError {
	/// Writing to an `io::Write` sink failed
	#[error("failed to write rendered output: {0}")]
	Io(#[from] std::io::Error),

	/// Writing to a `fmt::Write` sink failed
	#[error("failed to format rendered output")]
	Fmt(#[from] std::fmt::Error),

	/// A custom sink rejected the write
	#[error("sink rejected write: {0}")]
	Sink(String),
}

impl RenderError {
	/// Creates an error for a custom [`Sink`](crate::Sink) implementation.
	pub fn sink(message: impl Into<String>) -> Self {
		Self::Sink(message.into())
	}
}

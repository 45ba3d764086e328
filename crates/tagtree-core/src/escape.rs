//! HTML escaping.
//!
//! Every [`Text`](crate::Node::Text) node goes through this module on its
//! way to the sink. [`Raw`](crate::Node::Raw) nodes bypass it entirely.

use std::borrow::Cow;

use crate::error::RenderResult;
use crate::sink::Sink;

const SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

fn entity(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#39;"),
		_ => None,
	}
}

/// Escapes HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities. The input is
/// borrowed unchanged when it contains none of them. Escaping an already
/// escaped string escapes it again.
///
/// # Example
///
/// ```
/// use tagtree_core::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if !s.contains(SPECIAL) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match entity(c) {
			Some(e) => escaped.push_str(e),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Writes `s` to `sink` with HTML special characters escaped.
///
/// Runs of safe characters are written as single slices, so no intermediate
/// string is allocated.
pub fn write_escaped(sink: &mut dyn Sink, s: &str) -> RenderResult<()> {
	let mut start = 0;
	for (i, c) in s.char_indices() {
		if let Some(e) = entity(c) {
			if start < i {
				sink.write_str(&s[start..i])?;
			}
			sink.write_str(e)?;
			start = i + c.len_utf8();
		}
	}
	if start < s.len() {
		sink.write_str(&s[start..])?;
	}
	Ok(())
}

//! Element attribute storage.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Attribute name/value pairs of a single element.
///
/// Keys are unique. Iteration follows first-insertion order; overwriting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`. An empty value leaves the map untouched.
	pub(crate) fn set(&mut self, key: Cow<'static, str>, value: Cow<'static, str>) {
		if value.is_empty() {
			return;
		}
		self.entries.insert(key, value);
	}

	/// Returns the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(|v| v.as_ref())
	}

	/// Returns `true` if `key` is set.
	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no attribute is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in render order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
	}
}

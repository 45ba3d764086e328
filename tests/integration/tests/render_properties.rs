//! Property-based tests for rendering
//!
//! Uses proptest to verify properties that should hold for all inputs.

mod property_tests {
	use proptest::prelude::*;
	use proptest::proptest;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use tagtree::prelude::*;
	use tagtree::escape_html;
	use tagtree_integration_tests::unescape_html;

	/// Text with a high density of characters that need escaping
	fn markup_text() -> impl Strategy<Value = String> {
		r#"[a-z <>&"' ;#0-9]{0,64}"#
	}

	/// Optional children: `None` stands for an absent entry
	fn sparse_children() -> impl Strategy<Value = Vec<Option<String>>> {
		prop::collection::vec(prop::option::of("[a-z<&]{0,8}"), 0..16)
	}

	proptest! {
		/// Property: unescaping rendered text yields the original text
		#[test]
		fn prop_escape_round_trip(s in markup_text()) {
			let rendered = text(s.clone()).render_to_string().unwrap();
			prop_assert_eq!(unescape_html(&rendered), s);
		}

		/// Property: rendered text never contains a raw special character
		#[test]
		fn prop_escaped_text_has_no_markup(s in markup_text()) {
			let rendered = text(s).render_to_string().unwrap();
			prop_assert!(!rendered.contains(['<', '>', '"', '\'']));
		}

		/// Property: streaming escape equals the allocating escape
		#[test]
		fn prop_streaming_escape_matches(s in markup_text()) {
			let rendered = text(s.clone()).render_to_string().unwrap();
			prop_assert_eq!(rendered, escape_html(&s).into_owned());
		}

		/// Property: absent children render exactly like removed children
		#[test]
		fn prop_absent_children_are_skipped(children in sparse_children()) {
			let sparse: Vec<Node> = children.iter().cloned().map(IntoNode::into_node).collect();
			let dense: Vec<Node> = children.iter().flatten().cloned().map(text).collect();
			let with_gaps = group(sparse.clone());
			let without_gaps = group(dense.clone());
			prop_assert_eq!(
				with_gaps.render_to_string().unwrap(),
				without_gaps.render_to_string().unwrap()
			);

			let el_with = div().children(sparse);
			let el_without = div().children(dense);
			prop_assert_eq!(
				el_with.render_to_string().unwrap(),
				el_without.render_to_string().unwrap()
			);
		}

		/// Property: void elements render the same with or without children
		#[test]
		fn prop_void_children_never_render(
			name in "[a-z]{1,8}",
			children in prop::collection::vec("[a-z<>]{0,8}", 1..8)
		) {
			let bare = Element::new(name.clone(), true, nodes![]);
			let with_children = Element::new(
				name.clone(),
				true,
				children.into_iter().map(text).collect::<Vec<_>>(),
			);
			let rendered = with_children.render_to_string().unwrap();
			prop_assert_eq!(&rendered, &bare.render_to_string().unwrap());
			prop_assert!(!rendered.contains("</"));
		}

		/// Property: map output is the in-order concatenation of each item's output
		#[test]
		fn prop_map_preserves_order_and_count(items in prop::collection::vec(any::<u16>(), 0..32)) {
			let calls = Arc::new(AtomicUsize::new(0));
			let counter = Arc::clone(&calls);
			let mapped = map(items.clone(), move |n| {
				counter.fetch_add(1, Ordering::SeqCst);
				li().child(n.to_string())
			});
			let expected: String = items
				.iter()
				.map(|n| li().child(n.to_string()).render_to_string().unwrap())
				.collect();
			prop_assert_eq!(mapped.render_to_string().unwrap(), expected);
			prop_assert_eq!(calls.load(Ordering::SeqCst), items.len());
		}

		/// Property: an empty attribute value never appears in the output
		#[test]
		fn prop_empty_attribute_suppressed(key in "[a-z]{1,10}") {
			let el = div().attribute(key.clone(), "");
			let rendered = el.render_to_string().unwrap();
			let fragment = format!("{key}=");
			prop_assert!(!rendered.contains(&fragment));
			prop_assert_eq!(rendered, "<div></div>");
		}

		/// Property: setting a key twice keeps one fragment with the last value
		#[test]
		fn prop_last_write_wins(
			key in "[a-z]{1,10}",
			first in "[a-z0-9]{1,10}",
			second in "[a-z0-9]{1,10}"
		) {
			let el = span().attribute(key.clone(), first).attribute(key.clone(), second.clone());
			let rendered = el.render_to_string().unwrap();
			let fragment = format!(" {key}=");
			prop_assert_eq!(rendered.matches(&fragment).count(), 1);
			let expected = format!(r#"{key}="{second}""#);
			prop_assert!(rendered.contains(&expected));
		}

		/// Property: lazy conditionals call only the taken branch
		#[test]
		fn prop_lazy_calls_only_taken_branch(condition in any::<bool>(), renders in 1usize..4) {
			let then_calls = Arc::new(AtomicUsize::new(0));
			let else_calls = Arc::new(AtomicUsize::new(0));
			let (t, e) = (Arc::clone(&then_calls), Arc::clone(&else_calls));
			let node = when_else_with(
				condition,
				move || {
					t.fetch_add(1, Ordering::SeqCst);
					text("then")
				},
				move || {
					e.fetch_add(1, Ordering::SeqCst);
					text("else")
				},
			);
			for _ in 0..renders {
				node.render_to_string().unwrap();
			}
			let (taken, untaken) = if condition {
				(then_calls.load(Ordering::SeqCst), else_calls.load(Ordering::SeqCst))
			} else {
				(else_calls.load(Ordering::SeqCst), then_calls.load(Ordering::SeqCst))
			};
			prop_assert_eq!(taken, renders);
			prop_assert_eq!(untaken, 0);
		}
	}
}

//! Typed attribute setters.
//!
//! [`AttributeExt`] adds one `name(value)` / `name_if(condition, value)`
//! pair per known attribute to [`Element`]. Every setter delegates to
//! [`Element::attribute`] or [`Element::attribute_if`], so an empty value
//! is still ignored and the last write still wins.
//!
//! Attributes named after Rust keywords use raw identifiers
//! (`r#type`, `r#for`, `r#loop`, `r#async`); dashed or camel-cased names
//! become snake case (`http_equiv`, `view_box`).
//!
//! ## Example
//!
//! ```
//! use tagtree_core::Render;
//! use tagtree_elements::{AttributeExt, a};
//!
//! let link = a().href("/docs").classes(["nav", "active"]).child("Docs");
//! assert_eq!(
//! 	link.render_to_string().unwrap(),
//! 	r#"<a href="/docs" class="nav active">Docs</a>"#
//! );
//! ```

use std::borrow::Cow;

use tagtree_core::Element;

macro_rules! attribute_setters {
	($($method:ident, $method_if:ident => $attr:literal;)*) => {
		/// Typed attribute setters for [`Element`].
		pub trait AttributeExt: Sized {
			/// Sets the `class` attribute to `values` joined by single spaces.
			fn classes<I, S>(self, values: I) -> Self
			where
				I: IntoIterator<Item = S>,
				S: AsRef<str>;

			/// Sets the `class` attribute.
			fn class(self, value: impl Into<Cow<'static, str>>) -> Self;

			/// Sets the `class` attribute only when `condition` is true.
			fn class_if(self, condition: bool, value: impl Into<Cow<'static, str>>) -> Self;

			$(
				#[doc = concat!("Sets the `", $attr, "` attribute.")]
				fn $method(self, value: impl Into<Cow<'static, str>>) -> Self;

				#[doc = concat!("Sets the `", $attr, "` attribute only when `condition` is true.")]
				fn $method_if(self, condition: bool, value: impl Into<Cow<'static, str>>) -> Self;
			)*
		}

		impl AttributeExt for Element {
			fn classes<I, S>(self, values: I) -> Self
			where
				I: IntoIterator<Item = S>,
				S: AsRef<str>,
			{
				let joined = values
					.into_iter()
					.map(|v| v.as_ref().to_owned())
					.collect::<Vec<_>>()
					.join(" ");
				self.attribute("class", joined)
			}

			fn class(self, value: impl Into<Cow<'static, str>>) -> Self {
				self.attribute("class", value)
			}

			fn class_if(self, condition: bool, value: impl Into<Cow<'static, str>>) -> Self {
				self.attribute_if(condition, "class", value)
			}

			$(
				fn $method(self, value: impl Into<Cow<'static, str>>) -> Self {
					self.attribute($attr, value)
				}

				fn $method_if(self, condition: bool, value: impl Into<Cow<'static, str>>) -> Self {
					self.attribute_if(condition, $attr, value)
				}
			)*
		}
	};
}

attribute_setters! {
	accesskey, accesskey_if => "accesskey";
	action, action_if => "action";
	allow, allow_if => "allow";
	allowfullscreen, allowfullscreen_if => "allowfullscreen";
	alt, alt_if => "alt";
	r#async, async_if => "async";
	autocomplete, autocomplete_if => "autocomplete";
	autofocus, autofocus_if => "autofocus";
	autoplay, autoplay_if => "autoplay";
	border, border_if => "border";
	cellpadding, cellpadding_if => "cellpadding";
	cellspacing, cellspacing_if => "cellspacing";
	charset, charset_if => "charset";
	checked, checked_if => "checked";
	cite, cite_if => "cite";
	cols, cols_if => "cols";
	colspan, colspan_if => "colspan";
	content, content_if => "content";
	contenteditable, contenteditable_if => "contenteditable";
	controls, controls_if => "controls";
	coords, coords_if => "coords";
	crossorigin, crossorigin_if => "crossorigin";
	cx, cx_if => "cx";
	cy, cy_if => "cy";
	d, d_if => "d";
	datetime, datetime_if => "datetime";
	decoding, decoding_if => "decoding";
	defer, defer_if => "defer";
	dir, dir_if => "dir";
	disabled, disabled_if => "disabled";
	download, download_if => "download";
	draggable, draggable_if => "draggable";
	enctype, enctype_if => "enctype";
	fill, fill_if => "fill";
	r#for, for_if => "for";
	form, form_if => "form";
	formaction, formaction_if => "formaction";
	formenctype, formenctype_if => "formenctype";
	formmethod, formmethod_if => "formmethod";
	formnovalidate, formnovalidate_if => "formnovalidate";
	formtarget, formtarget_if => "formtarget";
	headers, headers_if => "headers";
	height, height_if => "height";
	hidden, hidden_if => "hidden";
	high, high_if => "high";
	href, href_if => "href";
	hreflang, hreflang_if => "hreflang";
	http_equiv, http_equiv_if => "http-equiv";
	id, id_if => "id";
	integrity, integrity_if => "integrity";
	ismap, ismap_if => "ismap";
	label, label_if => "label";
	lang, lang_if => "lang";
	loading, loading_if => "loading";
	r#loop, loop_if => "loop";
	low, low_if => "low";
	max, max_if => "max";
	maxlength, maxlength_if => "maxlength";
	media, media_if => "media";
	method, method_if => "method";
	min, min_if => "min";
	minlength, minlength_if => "minlength";
	multiple, multiple_if => "multiple";
	muted, muted_if => "muted";
	name, name_if => "name";
	nomodule, nomodule_if => "nomodule";
	novalidate, novalidate_if => "novalidate";
	open, open_if => "open";
	optimum, optimum_if => "optimum";
	pattern, pattern_if => "pattern";
	ping, ping_if => "ping";
	placeholder, placeholder_if => "placeholder";
	points, points_if => "points";
	poster, poster_if => "poster";
	preload, preload_if => "preload";
	preserve_aspect_ratio, preserve_aspect_ratio_if => "preserveAspectRatio";
	r, r_if => "r";
	readonly, readonly_if => "readonly";
	referrerpolicy, referrerpolicy_if => "referrerpolicy";
	rel, rel_if => "rel";
	required, required_if => "required";
	reversed, reversed_if => "reversed";
	role, role_if => "role";
	rows, rows_if => "rows";
	rowspan, rowspan_if => "rowspan";
	rx, rx_if => "rx";
	ry, ry_if => "ry";
	sandbox, sandbox_if => "sandbox";
	scope, scope_if => "scope";
	selected, selected_if => "selected";
	shape, shape_if => "shape";
	size, size_if => "size";
	sizes, sizes_if => "sizes";
	span, span_if => "span";
	spellcheck, spellcheck_if => "spellcheck";
	src, src_if => "src";
	srcdoc, srcdoc_if => "srcdoc";
	srcset, srcset_if => "srcset";
	start, start_if => "start";
	stroke, stroke_if => "stroke";
	stroke_width, stroke_width_if => "stroke-width";
	style, style_if => "style";
	tabindex, tabindex_if => "tabindex";
	target, target_if => "target";
	title, title_if => "title";
	transform, transform_if => "transform";
	translate, translate_if => "translate";
	r#type, type_if => "type";
	usemap, usemap_if => "usemap";
	value, value_if => "value";
	version, version_if => "version";
	view_box, view_box_if => "viewBox";
	width, width_if => "width";
	wrap, wrap_if => "wrap";
	x, x_if => "x";
	x1, x1_if => "x1";
	x2, x2_if => "x2";
	xmlns, xmlns_if => "xmlns";
	y, y_if => "y";
	y1, y1_if => "y1";
	y2, y2_if => "y2";
}

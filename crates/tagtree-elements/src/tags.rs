//! Typed element constructors.
//!
//! Each function returns a plain [`Element`] with the tag name and void flag
//! filled in. Children are added with [`Element::children`] or
//! [`Element::child`].
//!
//! Constructors whose tag collides with a Rust keyword or a core combinator
//! carry a trailing underscore: [`main_`], [`map_`], [`use_`].

use tagtree_core::Element;

/// Elements that self-close and never render children.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Returns `true` if `name` is one of [`VOID_ELEMENTS`].
pub fn is_void_element(name: &str) -> bool {
	VOID_ELEMENTS.contains(&name)
}

macro_rules! elements {
	($($func:ident => $tag:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates a `<", $tag, ">` element.")]
			pub fn $func() -> Element {
				Element::new($tag, false, Vec::new())
			}
		)*
	};
}

macro_rules! void_elements {
	($($func:ident => $tag:literal),* $(,)?) => {
		$(
			#[doc = concat!("Creates a void `<", $tag, "/>` element. Children are never rendered.")]
			pub fn $func() -> Element {
				Element::new($tag, true, Vec::new())
			}
		)*
	};
}

elements! {
	a => "a",
	abbr => "abbr",
	address => "address",
	article => "article",
	aside => "aside",
	audio => "audio",
	b => "b",
	bdi => "bdi",
	bdo => "bdo",
	blockquote => "blockquote",
	body => "body",
	button => "button",
	canvas => "canvas",
	caption => "caption",
	circle => "circle",
	cite => "cite",
	code => "code",
	colgroup => "colgroup",
	data => "data",
	datalist => "datalist",
	dd => "dd",
	del => "del",
	details => "details",
	dfn => "dfn",
	dialog => "dialog",
	div => "div",
	dl => "dl",
	dt => "dt",
	ellipse => "ellipse",
	em => "em",
	fieldset => "fieldset",
	figcaption => "figcaption",
	figure => "figure",
	footer => "footer",
	form => "form",
	g => "g",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	head => "head",
	header => "header",
	html => "html",
	i => "i",
	iframe => "iframe",
	ins => "ins",
	kbd => "kbd",
	label => "label",
	legend => "legend",
	li => "li",
	line => "line",
	main_ => "main",
	map_ => "map",
	mark => "mark",
	meter => "meter",
	nav => "nav",
	noscript => "noscript",
	object => "object",
	ol => "ol",
	optgroup => "optgroup",
	option => "option",
	output => "output",
	p => "p",
	path => "path",
	picture => "picture",
	polygon => "polygon",
	polyline => "polyline",
	pre => "pre",
	progress => "progress",
	q => "q",
	rect => "rect",
	rp => "rp",
	rt => "rt",
	ruby => "ruby",
	s => "s",
	samp => "samp",
	script => "script",
	section => "section",
	select => "select",
	small => "small",
	span => "span",
	strong => "strong",
	style => "style",
	sub => "sub",
	summary => "summary",
	sup => "sup",
	svg => "svg",
	table => "table",
	tbody => "tbody",
	td => "td",
	template => "template",
	textarea => "textarea",
	tfoot => "tfoot",
	th => "th",
	thead => "thead",
	time => "time",
	title => "title",
	tr => "tr",
	u => "u",
	ul => "ul",
	use_ => "use",
	var => "var",
	video => "video",
}

void_elements! {
	area => "area",
	base => "base",
	br => "br",
	col => "col",
	embed => "embed",
	hr => "hr",
	img => "img",
	input => "input",
	link => "link",
	meta => "meta",
	param => "param",
	source => "source",
	track => "track",
	wbr => "wbr",
}

//! Snapshot tests for complete pages
//!
//! Attribute order is insertion order, so rendered pages are stable enough
//! to snapshot byte for byte.

use insta::assert_snapshot;
use rstest::rstest;
use tagtree::prelude::*;

struct Article {
	slug: &'static str,
	title: &'static str,
	draft: bool,
}

fn articles() -> Vec<Article> {
	vec![
		Article {
			slug: "hello",
			title: "Hello <World>",
			draft: false,
		},
		Article {
			slug: "wip",
			title: "Work & Progress",
			draft: true,
		},
	]
}

fn layout(page_title: &'static str, content: Node) -> Document {
	document(nodes![
		html().lang("en").children(nodes![
			head().children(nodes![
				meta().charset("utf-8"),
				title().child(page_title),
				link().rel("stylesheet").href("/static/site.css"),
			]),
			body().children(nodes![
				header().child(nav().child(a().href("/").child("Home"))),
				main_().child(content),
			]),
		]),
	])
}

#[rstest]
fn test_article_index_snapshot() {
	let list = ul().class("articles").child(map(articles(), |article| {
		li().class_if(article.draft, "draft").child(
			a().href(format!("/articles/{}", article.slug))
				.child(text(article.title)),
		)
	}));
	let page = layout("Articles", list.into_node());
	assert_snapshot!(
		page.render_to_string().unwrap(),
		@r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"/><title>Articles</title><link rel="stylesheet" href="/static/site.css"/></head><body><header><nav><a href="/">Home</a></nav></header><main><ul class="articles"><li><a href="/articles/hello">Hello &lt;World&gt;</a></li><li class="draft"><a href="/articles/wip">Work &amp; Progress</a></li></ul></main></body></html>"#
	);
}

#[rstest]
fn test_login_form_snapshot() {
	let error: Option<&'static str> = Some("Invalid password");
	let form_el = form().action("/login").method("post").children(nodes![
		when_with(error.is_some(), move || {
			p().class("error").child(text(error.unwrap_or_default()))
		}),
		label().r#for("user").child("User"),
		input().r#type("text").id("user").name("user").required("required"),
		input().r#type("password").name("password").autocomplete("current-password"),
		button().r#type("submit").child("Sign in"),
	]);
	assert_snapshot!(
		form_el.render_to_string().unwrap(),
		@r#"<form action="/login" method="post"><p class="error">Invalid password</p><label for="user">User</label><input type="text" id="user" name="user" required="required"/><input type="password" name="password" autocomplete="current-password"/><button type="submit">Sign in</button></form>"#
	);
}

#[rstest]
fn test_svg_icon_snapshot() {
	let icon = svg()
		.xmlns("http://www.w3.org/2000/svg")
		.view_box("0 0 24 24")
		.width("24")
		.height("24")
		.children(nodes![
			circle().cx("12").cy("12").r("10").fill("none").stroke("currentColor"),
			path().d("M8 12h8").stroke_width("2"),
		]);
	assert_snapshot!(
		icon.render_to_string().unwrap(),
		@r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"><circle cx="12" cy="12" r="10" fill="none" stroke="currentColor"></circle><path d="M8 12h8" stroke-width="2"></path></svg>"#
	);
}

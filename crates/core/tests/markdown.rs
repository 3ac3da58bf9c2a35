//! Markdown conversion over realistic fragments.

use pluck::html_to_markdown;

#[test]
fn article_fragment_maps_structure() {
	let html = r#"
		<article>
			<h2>Release Notes</h2>
			<p>Version <strong>2.0</strong> ships <em>today</em>.</p>
			<ul>
				<li>Faster parsing</li>
				<li>New <code>extract</code> command</li>
			</ul>
			<pre>cargo install pluck</pre>
		</article>
	"#;
	let markdown = html_to_markdown(html);
	assert!(markdown.contains("## Release Notes"));
	assert!(markdown.contains("Version **2.0** ships _today_."));
	assert!(markdown.contains("- Faster parsing"));
	assert!(markdown.contains("- New `extract` command"));
	assert!(markdown.contains("```\ncargo install pluck\n```"));
}

#[test]
fn nested_lists_keep_their_structure() {
	let html = "<ul><li>top<ul><li>inner one</li><li>inner two</li></ul></li><li>next</li></ul>";
	let markdown = html_to_markdown(html);
	assert_eq!(markdown, "- top\n  - inner one\n  - inner two\n- next");
}

#[test]
fn ordered_list_numbering_restarts_per_list() {
	let html = "<ol><li>a</li><li>b</li></ol><ol><li>c</li></ol>";
	let markdown = html_to_markdown(html);
	assert_eq!(markdown, "1. a\n2. b\n\n1. c");
}

#[test]
fn links_and_images_render_inline() {
	let html = "<p>See <a href=\"https://example.com/docs\">the docs</a> and <img src=\"/diagram.png\" alt=\"diagram\"></p>";
	let markdown = html_to_markdown(html);
	assert_eq!(markdown, "See [the docs](https://example.com/docs) and ![diagram](/diagram.png)");
}

#[test]
fn blockquote_lines_are_prefixed() {
	let markdown = html_to_markdown("<blockquote><p>first</p><p>second</p></blockquote>");
	assert_eq!(markdown, "> first\n>\n> second");
}

#[test]
fn code_block_content_is_literal() {
	let html = "<pre>fn main() {\n    println!(\"hi\");\n}</pre>";
	let markdown = html_to_markdown(html);
	assert!(markdown.contains("fn main() {\n    println!(\"hi\");\n}"));
	assert!(markdown.starts_with("```"));
	assert!(markdown.ends_with("```"));
}

#[test]
fn noise_tags_disappear_entirely() {
	let html = r#"
		<p>keep me</p>
		<script>tracking();</script>
		<style>.x { color: red }</style>
		<noscript>enable js</noscript>
		<iframe src="/ad"></iframe>
		<svg><text>vector</text></svg>
		<canvas>fallback</canvas>
		<template><p>stamp</p></template>
	"#;
	let markdown = html_to_markdown(html);
	assert_eq!(markdown, "keep me");
}

#[test]
fn hidden_signals_remove_the_subtree() {
	let html = r#"
		<div hidden><p>flagged</p></div>
		<div aria-hidden="true"><p>decorative</p></div>
		<div style="display:none"><p>collapsed</p></div>
		<div style="color: black; display: none"><p>spaced style</p></div>
		<p>survivor</p>
	"#;
	let markdown = html_to_markdown(html);
	assert_eq!(markdown, "survivor");
}

#[test]
fn horizontal_rule_and_breaks() {
	let markdown = html_to_markdown("<p>one<br>two</p><hr><p>three</p>");
	assert_eq!(markdown, "one\ntwo\n\n---\n\nthree");
}

#[test]
fn whitespace_normalization_is_idempotent() {
	let html = "<div>\n\n  <p>a</p>\n\n\n  <p>b</p>\n\n</div>";
	let once = html_to_markdown(html);
	assert_eq!(once, "a\n\nb");
	assert!(!once.contains("\n\n\n"));
}

#[test]
fn empty_and_whitespace_fragments_render_empty() {
	assert_eq!(html_to_markdown(""), "");
	assert_eq!(html_to_markdown("   \n\t "), "");
	assert_eq!(html_to_markdown("<h3></h3>"), "");
}

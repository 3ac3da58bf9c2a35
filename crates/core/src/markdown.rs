//! HTML-to-Markdown conversion.
//!
//! Non-content elements (scripts, styles, frames, vector graphics) and
//! anything carrying a hidden signal are dropped before structural tags
//! are mapped to Markdown syntax. The walk is tree-based so nested lists
//! and block containers round-trip with their structure intact.

use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::{ElementRef, Html};

/// Tags whose content must not appear in the output at all.
const DROP_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "svg", "canvas", "template"];

/// Containers rendered as blocks separated by blank lines.
const BLOCK_TAGS: &[&str] = &[
	"div", "section", "article", "main", "header", "footer", "aside", "nav", "figure", "figcaption", "table", "thead", "tbody", "tfoot",
	"tr", "dl", "dt", "dd", "form", "fieldset", "details", "summary", "address",
];

/// Convert an HTML fragment to Markdown text.
pub fn html_to_markdown(html: &str) -> String {
	let fragment = Html::parse_fragment(html);
	let rendered = render_children(*fragment.root_element(), 0);
	normalize(&rendered)
}

fn render_children(node: NodeRef<'_, Node>, list_depth: usize) -> String {
	node.children().map(|child| render_node(child, list_depth)).collect()
}

fn render_node(node: NodeRef<'_, Node>, list_depth: usize) -> String {
	match node.value() {
		Node::Text(text) => collapse_spaces(text),
		Node::Element(_) => {
			let Some(el) = ElementRef::wrap(node) else {
				return String::new();
			};
			render_element(el, list_depth)
		}
		_ => String::new(),
	}
}

fn render_element(el: ElementRef<'_>, list_depth: usize) -> String {
	let element = el.value();
	let name = element.name();

	if DROP_TAGS.contains(&name) || is_hidden(element) {
		return String::new();
	}

	match name {
		"h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
			let level = usize::from(name.as_bytes()[1] - b'0');
			let text = inline_content(el, list_depth);
			if text.is_empty() {
				String::new()
			} else {
				format!("\n\n{} {}\n\n", "#".repeat(level), text)
			}
		}
		"p" => block(render_children(*el, list_depth)),
		"strong" | "b" => wrap_inline(el, list_depth, "**"),
		"em" | "i" => wrap_inline(el, list_depth, "_"),
		"a" => {
			let text = inline_content(el, list_depth);
			match element.attr("href") {
				Some(href) => format!("[{text}]({href})"),
				None => text,
			}
		}
		"img" => match element.attr("src") {
			Some(src) => format!("![{}]({src})", element.attr("alt").unwrap_or_default()),
			None => String::new(),
		},
		"ul" => render_list(el, list_depth, false),
		"ol" => render_list(el, list_depth, true),
		"pre" => {
			let code: String = el.text().collect();
			let code = code.trim_matches('\n');
			format!("\n\n```\n{code}\n```\n\n")
		}
		"code" => {
			let code: String = el.text().collect();
			if code.is_empty() { String::new() } else { format!("`{code}`") }
		}
		"blockquote" => {
			let body = normalize(&render_children(*el, list_depth));
			if body.is_empty() {
				return String::new();
			}
			let quoted: Vec<String> = body
				.lines()
				.map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
				.collect();
			block(quoted.join("\n"))
		}
		"br" => "\n".to_string(),
		"hr" => "\n\n---\n\n".to_string(),
		_ if BLOCK_TAGS.contains(&name) => block(render_children(*el, list_depth)),
		// Unknown and inline elements contribute their children in place.
		_ => render_children(*el, list_depth),
	}
}

fn render_list(el: ElementRef<'_>, list_depth: usize, ordered: bool) -> String {
	let indent = "  ".repeat(list_depth);
	let mut items = Vec::new();
	let mut index = 1usize;

	for child in el.children() {
		let Some(item) = ElementRef::wrap(child) else {
			continue;
		};
		if item.value().name() != "li" || is_hidden(item.value()) {
			continue;
		}

		let body = render_children(*item, list_depth + 1);
		let body = body.trim_matches('\n').trim_end();
		let mut lines = body.lines().filter(|line| !line.trim().is_empty());
		let Some(first) = lines.next() else {
			continue;
		};

		let marker = if ordered {
			let marker = format!("{index}. ");
			index += 1;
			marker
		} else {
			"- ".to_string()
		};

		let mut rendered = format!("{indent}{marker}{}", first.trim());
		for line in lines {
			rendered.push('\n');
			// Nested list lines carry their own indentation already.
			if line.starts_with(' ') {
				rendered.push_str(line);
			} else {
				rendered.push_str(&indent);
				rendered.push_str("  ");
				rendered.push_str(line.trim());
			}
		}
		items.push(rendered);
	}

	if items.is_empty() {
		return String::new();
	}
	let joined = items.join("\n");
	if list_depth == 0 {
		format!("\n\n{joined}\n\n")
	} else {
		format!("\n{joined}")
	}
}

fn wrap_inline(el: ElementRef<'_>, list_depth: usize, marker: &str) -> String {
	let text = inline_content(el, list_depth);
	if text.is_empty() { String::new() } else { format!("{marker}{text}{marker}") }
}

fn block(body: String) -> String {
	let body = body.trim();
	if body.is_empty() { String::new() } else { format!("\n\n{body}\n\n") }
}

fn inline_content(el: ElementRef<'_>, list_depth: usize) -> String {
	collapse_spaces(&render_children(*el, list_depth)).trim().to_string()
}

/// An explicit hidden flag, an `aria-hidden` marker, or an inline
/// `display:none` style all exclude the element and its descendants.
fn is_hidden(element: &Element) -> bool {
	if element.attr("hidden").is_some() {
		return true;
	}
	if element.attr("aria-hidden") == Some("true") {
		return true;
	}
	if let Some(style) = element.attr("style") {
		let style = style.to_ascii_lowercase();
		return style.contains("display:none") || style.contains("display: none");
	}
	false
}

/// Collapse whitespace runs to single spaces, keeping word boundaries.
fn collapse_spaces(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut in_whitespace = false;
	for ch in text.chars() {
		if ch.is_whitespace() && ch != '\n' {
			if !in_whitespace {
				out.push(' ');
			}
			in_whitespace = true;
		} else {
			out.push(ch);
			in_whitespace = ch == '\n';
		}
	}
	out
}

/// Collapse runs of blank lines and strip trailing whitespace, leaving
/// fenced code blocks untouched.
fn normalize(text: &str) -> String {
	let mut out: Vec<String> = Vec::new();
	let mut previous_blank = true;
	let mut in_fence = false;

	for line in text.lines() {
		if line.trim_start().starts_with("```") {
			in_fence = !in_fence;
			out.push(line.trim_end().to_string());
			previous_blank = false;
			continue;
		}
		if in_fence {
			out.push(line.to_string());
			continue;
		}

		let line = line.trim_end();
		if line.is_empty() {
			if !previous_blank {
				out.push(String::new());
			}
			previous_blank = true;
		} else {
			out.push(line.to_string());
			previous_blank = false;
		}
	}

	while out.last().is_some_and(String::is_empty) {
		out.pop();
	}
	out.join("\n")
}

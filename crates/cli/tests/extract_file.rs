//! End-to-end runs of the `extract` command against the compiled binary.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

const PAGE: &str = r#"<html><body>
	<h1>Release Notes</h1>
	<ul class="changes">
		<li>Faster startup</li>
		<li>Fewer crashes</li>
	</ul>
	<p><a class="docs" href="/docs">read more</a></p>
</body></html>"#;

fn write_page(dir: &TempDir) -> PathBuf {
	let path = dir.path().join("page.html");
	std::fs::write(&path, PAGE).unwrap();
	path
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_pluck"))
		.args(args)
		.output()
		.expect("binary should run")
}

/// Extraction output minus the trailing status line.
fn payload(output: &Output) -> String {
	let stdout = String::from_utf8_lossy(&output.stdout);
	stdout
		.lines()
		.take_while(|line| !line.starts_with('ℹ'))
		.collect::<Vec<_>>()
		.join("\n")
		.trim_end()
		.to_string()
}

#[test]
fn extracts_text_from_a_file() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", "h1"]);
	assert!(output.status.success());
	assert_eq!(payload(&output), "Release Notes");
}

#[test]
fn json_output_is_parseable_with_data_then_count() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", ".changes li", "--multiple", "-o", "json"]);
	assert!(output.status.success());

	let body = payload(&output);
	assert!(body.trim_start().starts_with("{\n  \"data\""));
	let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
	assert_eq!(parsed["data"], serde_json::json!(["Faster startup", "Fewer crashes"]));
	assert_eq!(parsed["count"], serde_json::json!(2));
}

#[test]
fn attribute_extraction_reads_the_named_attribute() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", "a.docs", "-a", "href"]);
	assert!(output.status.success());
	assert_eq!(payload(&output), "/docs");
}

#[test]
fn markdown_flag_converts_extracted_markup() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", "body", "--markdown"]);
	assert!(output.status.success());
	assert_eq!(
		payload(&output),
		"# Release Notes\n\n- Faster startup\n- Fewer crashes\n\n[read more](/docs)"
	);
}

#[test]
fn no_match_reports_no_results() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", ".missing"]);
	assert!(output.status.success());
	assert_eq!(payload(&output), "No results found");
}

#[test]
fn unreadable_file_exits_nonzero() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("nope.html");

	let output = run(&["extract", missing.to_str().unwrap(), "-s", "h1"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("failed to read"));
}

#[test]
fn unknown_output_format_is_a_usage_error() {
	let dir = TempDir::new().unwrap();
	let page = write_page(&dir);

	let output = run(&["extract", page.to_str().unwrap(), "-s", "h1", "-o", "yaml"]);
	assert!(!output.status.success());
}

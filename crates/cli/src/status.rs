//! Human-facing status lines, kept separate from tracing output.
//!
//! Progress markers go to stdout alongside the extraction result; errors go
//! to stderr. Colors are disabled automatically when not writing to a tty.

use colored::Colorize;

pub fn success(message: &str) {
	println!("{} {message}", "✓".green());
}

pub fn error(message: &str) {
	eprintln!("{} {message}", "✗".red());
}

pub fn info(message: &str) {
	println!("{} {message}", "ℹ".blue());
}

pub fn warn(message: &str) {
	println!("{} {message}", "⚠".yellow());
}

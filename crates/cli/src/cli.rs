use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pluck::{DEFAULT_TIMEOUT_MS, ExtractMode, ExtractionOptions, OutputFormat, SelectorKind};

#[derive(Parser, Debug)]
#[command(name = "pluck")]
#[command(about = "Browser automation and content extraction from the command line")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Extract content from a saved HTML file
	Extract {
		/// Path to the HTML file
		file: PathBuf,

		#[command(flatten)]
		extraction: FileExtractionArgs,
	},

	/// Launch a new browser instance and navigate to a URL
	Launch {
		url: String,

		/// Run the browser with a visible window
		#[arg(long)]
		headful: bool,

		/// Viewport size, e.g. 1920x1080
		#[arg(long, value_name = "WxH")]
		viewport: Option<String>,

		/// Custom user agent string
		#[arg(long, value_name = "STRING")]
		user_agent: Option<String>,

		#[command(flatten)]
		extraction: LiveExtractionArgs,
	},

	/// Connect to a running browser over the DevTools protocol
	Connect {
		url: String,

		/// DevTools websocket endpoint, e.g. ws://localhost:9222/...
		#[arg(long, value_name = "ENDPOINT")]
		endpoint: String,

		#[command(flatten)]
		extraction: LiveExtractionArgs,
	},
}

/// Extraction flags for the static `extract` command. CSS only; wait and
/// timeout do not apply to a parsed file.
#[derive(Args, Debug, Clone)]
pub struct FileExtractionArgs {
	/// CSS selector to extract
	#[arg(short, long)]
	pub selector: String,

	/// Extract an attribute value instead of text
	#[arg(short, long, value_name = "NAME")]
	pub attribute: Option<String>,

	/// Extract inner HTML instead of text
	#[arg(long)]
	pub html: bool,

	/// Convert extracted HTML to Markdown
	#[arg(long)]
	pub markdown: bool,

	/// Extract all matching elements
	#[arg(short, long)]
	pub multiple: bool,

	/// Output format: json, text, lines or markdown
	#[arg(short, long, default_value = "text")]
	pub output: OutputFormat,
}

/// Extraction flags shared by the live `launch` and `connect` commands.
#[derive(Args, Debug, Clone)]
pub struct LiveExtractionArgs {
	/// CSS (or XPath, with --xpath) selector to extract
	#[arg(short, long)]
	pub selector: Option<String>,

	/// Treat the selector as XPath instead of CSS
	#[arg(long)]
	pub xpath: bool,

	/// Extract an attribute value instead of text
	#[arg(short, long, value_name = "NAME")]
	pub attribute: Option<String>,

	/// Extract inner HTML instead of text
	#[arg(long)]
	pub html: bool,

	/// Convert extracted HTML to Markdown
	#[arg(long)]
	pub markdown: bool,

	/// Extract all matching elements
	#[arg(short, long)]
	pub multiple: bool,

	/// Output format: json, text, lines or markdown
	#[arg(short, long, default_value = "text")]
	pub output: OutputFormat,

	/// Do not wait for the selector to appear
	#[arg(long)]
	pub no_wait: bool,

	/// Timeout in milliseconds for waiting
	#[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
	pub timeout: u64,
}

impl FileExtractionArgs {
	pub fn to_options(&self) -> ExtractionOptions {
		let mut options = ExtractionOptions::new(&self.selector)
			.mode(extraction_mode(self.use_markdown(), self.html, self.attribute.is_some()))
			.multiple(self.multiple)
			.wait(false);
		if let Some(name) = &self.attribute {
			options = options.attribute(name);
		}
		options
	}

	pub fn effective_format(&self) -> OutputFormat {
		if self.use_markdown() { OutputFormat::Markdown } else { self.output }
	}

	fn use_markdown(&self) -> bool {
		self.markdown || self.output == OutputFormat::Markdown
	}
}

impl LiveExtractionArgs {
	pub fn to_options(&self, selector: &str) -> ExtractionOptions {
		let kind = if self.xpath { SelectorKind::Xpath } else { SelectorKind::Css };
		let mut options = ExtractionOptions::new(selector)
			.kind(kind)
			.mode(extraction_mode(self.use_markdown(), self.html, self.attribute.is_some()))
			.multiple(self.multiple)
			.wait(!self.no_wait)
			.timeout_ms(self.timeout);
		if let Some(name) = &self.attribute {
			options = options.attribute(name);
		}
		options
	}

	pub fn effective_format(&self) -> OutputFormat {
		if self.use_markdown() { OutputFormat::Markdown } else { self.output }
	}

	fn use_markdown(&self) -> bool {
		self.markdown || self.output == OutputFormat::Markdown
	}
}

/// Markdown output implies markup extraction so the converter receives
/// HTML fragments; an attribute name switches to attribute mode.
fn extraction_mode(use_markdown: bool, html: bool, has_attribute: bool) -> ExtractMode {
	if use_markdown || html {
		ExtractMode::Markup
	} else if has_attribute {
		ExtractMode::Attribute
	} else {
		ExtractMode::Text
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_extract_command() {
		let cli = Cli::try_parse_from(["pluck", "extract", "page.html", "-s", "h1", "-o", "json"]).unwrap();
		match cli.command {
			Commands::Extract { file, extraction } => {
				assert_eq!(file, PathBuf::from("page.html"));
				assert_eq!(extraction.selector, "h1");
				assert_eq!(extraction.output, OutputFormat::Json);
				assert!(!extraction.multiple);
			}
			_ => panic!("Expected Extract command"),
		}
	}

	#[test]
	fn extract_requires_selector() {
		assert!(Cli::try_parse_from(["pluck", "extract", "page.html"]).is_err());
	}

	#[test]
	fn parse_launch_with_live_flags() {
		let cli = Cli::try_parse_from([
			"pluck", "launch", "https://example.com", "-s", "//a", "--xpath", "--multiple", "--no-wait", "--timeout", "2500",
		])
		.unwrap();
		match cli.command {
			Commands::Launch { url, extraction, .. } => {
				assert_eq!(url, "https://example.com");
				let options = extraction.to_options("//a");
				assert_eq!(options.kind, SelectorKind::Xpath);
				assert!(options.multiple);
				assert!(!options.wait);
				assert_eq!(options.timeout_ms, 2500);
			}
			_ => panic!("Expected Launch command"),
		}
	}

	#[test]
	fn connect_requires_endpoint() {
		assert!(Cli::try_parse_from(["pluck", "connect", "https://example.com"]).is_err());
	}

	#[test]
	fn markdown_flag_forces_markup_mode_and_markdown_format() {
		let cli = Cli::try_parse_from(["pluck", "extract", "page.html", "-s", "article", "--markdown"]).unwrap();
		match cli.command {
			Commands::Extract { extraction, .. } => {
				assert_eq!(extraction.to_options().mode, ExtractMode::Markup);
				assert_eq!(extraction.effective_format(), OutputFormat::Markdown);
			}
			_ => panic!("Expected Extract command"),
		}
	}

	#[test]
	fn attribute_flag_selects_attribute_mode() {
		let cli = Cli::try_parse_from(["pluck", "extract", "page.html", "-s", "img", "-a", "src"]).unwrap();
		match cli.command {
			Commands::Extract { extraction, .. } => {
				let options = extraction.to_options();
				assert_eq!(options.mode, ExtractMode::Attribute);
				assert_eq!(options.attribute.as_deref(), Some("src"));
			}
			_ => panic!("Expected Extract command"),
		}
	}

	#[test]
	fn unknown_output_format_is_rejected() {
		assert!(Cli::try_parse_from(["pluck", "extract", "page.html", "-s", "h1", "-o", "yaml"]).is_err());
	}
}

//! Rendering of extraction results into output formats.

use serde::Serialize;

use crate::markdown::html_to_markdown;
use crate::result::{ExtractedData, ExtractionResult};

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
	/// `{ "data": …, "count": … }` serialization.
	Json,
	/// Values joined by a blank line (default).
	#[default]
	Text,
	/// One value per line.
	Lines,
	/// HTML values converted to Markdown.
	Markdown,
}

impl std::str::FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"json" => Ok(OutputFormat::Json),
			"text" => Ok(OutputFormat::Text),
			"lines" => Ok(OutputFormat::Lines),
			"markdown" => Ok(OutputFormat::Markdown),
			_ => Err(format!("unknown format: {s}")),
		}
	}
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Json => write!(f, "json"),
			OutputFormat::Text => write!(f, "text"),
			OutputFormat::Lines => write!(f, "lines"),
			OutputFormat::Markdown => write!(f, "markdown"),
		}
	}
}

/// Formatting request for one result.
#[derive(Debug, Clone)]
pub struct FormatOptions {
	pub format: OutputFormat,
	pub pretty: bool,
}

impl FormatOptions {
	pub fn new(format: OutputFormat) -> Self {
		Self { format, pretty: true }
	}

	pub fn pretty(mut self, pretty: bool) -> Self {
		self.pretty = pretty;
		self
	}
}

impl Default for FormatOptions {
	fn default() -> Self {
		Self::new(OutputFormat::default())
	}
}

// Field order is part of the JSON output contract: data, then count.
#[derive(Serialize)]
struct JsonPayload<'a> {
	data: &'a ExtractedData,
	count: usize,
}

/// Render a result in the requested format.
///
/// Total over every result shape: the error case renders as a message and
/// takes precedence over format-specific rules.
pub fn format_result(result: &ExtractionResult, options: &FormatOptions) -> String {
	if !result.success {
		let message = result.error.as_deref().unwrap_or("unknown error");
		return format!("Error: {message}");
	}

	if result.data.is_none() {
		return "No results found".to_string();
	}

	match options.format {
		OutputFormat::Json => {
			let payload = JsonPayload {
				data: &result.data,
				count: result.count,
			};
			let serialized = if options.pretty {
				serde_json::to_string_pretty(&payload)
			} else {
				serde_json::to_string(&payload)
			};
			serialized.unwrap_or_default()
		}
		OutputFormat::Lines => match &result.data {
			ExtractedData::Many(values) => values.join("\n"),
			ExtractedData::Single(value) => value.clone(),
			ExtractedData::None => String::new(),
		},
		OutputFormat::Markdown => match &result.data {
			ExtractedData::Many(values) => values.iter().map(|value| html_to_markdown(value)).collect::<Vec<_>>().join("\n\n---\n\n"),
			ExtractedData::Single(value) => html_to_markdown(value),
			ExtractedData::None => String::new(),
		},
		OutputFormat::Text => match &result.data {
			ExtractedData::Many(values) => values.join("\n\n"),
			ExtractedData::Single(value) => value.clone(),
			ExtractedData::None => String::new(),
		},
	}
}

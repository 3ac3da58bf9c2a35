use tracing::info;

use crate::browser::{BrowserSession, LaunchOptions};
use crate::cli::LiveExtractionArgs;
use crate::commands::run_page_flow;
use crate::error::Result;
use crate::status;

pub async fn execute(
	url: &str,
	headful: bool,
	viewport: Option<&str>,
	user_agent: Option<String>,
	args: &LiveExtractionArgs,
) -> Result<()> {
	info!(target: "pluck", url, headful, "launching browser");
	let options = LaunchOptions {
		headful,
		viewport: viewport.and_then(parse_viewport),
		user_agent,
	};
	let session = BrowserSession::launch(options).await?;
	status::success("Browser launched");

	run_page_flow(session, url, args, "Navigated. Use --selector to extract content.").await
}

/// Parse a `WIDTHxHEIGHT` viewport value. Malformed values are ignored
/// and the browser default applies.
fn parse_viewport(value: &str) -> Option<(u32, u32)> {
	let (width, height) = value.split_once('x')?;
	Some((width.parse().ok()?, height.parse().ok()?))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_well_formed_viewport() {
		assert_eq!(parse_viewport("1920x1080"), Some((1920, 1080)));
		assert_eq!(parse_viewport("800x600"), Some((800, 600)));
	}

	#[test]
	fn rejects_malformed_viewport() {
		assert_eq!(parse_viewport("1920"), None);
		assert_eq!(parse_viewport("x600"), None);
		assert_eq!(parse_viewport("widex tall"), None);
		assert_eq!(parse_viewport(""), None);
	}
}

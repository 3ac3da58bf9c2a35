use tracing::info;

use crate::browser::BrowserSession;
use crate::cli::LiveExtractionArgs;
use crate::commands::run_page_flow;
use crate::error::Result;
use crate::status;

pub async fn execute(url: &str, endpoint: &str, args: &LiveExtractionArgs) -> Result<()> {
	info!(target: "pluck", url, endpoint, "connecting to browser");
	let session = BrowserSession::connect(endpoint).await?;
	status::success("Connected to browser");

	run_page_flow(session, url, args, "Connected and navigated. Use --selector to extract content.").await
}

pub mod connect;
pub mod extract;
pub mod launch;

use pluck::FormatOptions;

use crate::browser::{BrowserSession, LivePage};
use crate::cli::{Commands, LiveExtractionArgs};
use crate::error::Result;
use crate::status;

pub async fn dispatch(command: Commands) -> Result<()> {
	match command {
		Commands::Extract { file, extraction } => extract::execute(&file, &extraction).await,
		Commands::Launch { url, headful, viewport, user_agent, extraction } => {
			launch::execute(&url, headful, viewport.as_deref(), user_agent, &extraction).await
		}
		Commands::Connect { url, endpoint, extraction } => connect::execute(&url, &endpoint, &extraction).await,
	}
}

/// Shared tail of the live commands: navigate, optionally extract, print,
/// shut the session down. The session is closed even when navigation fails.
pub(crate) async fn run_page_flow(
	session: BrowserSession,
	url: &str,
	args: &LiveExtractionArgs,
	idle_message: &str,
) -> Result<()> {
	if let Err(err) = session.goto(url).await {
		let _ = session.close().await;
		return Err(err);
	}
	status::success("Page loaded");

	match &args.selector {
		Some(selector) => {
			let live = LivePage::new(session.page().clone());
			let result = pluck::extract(&live, &args.to_options(selector)).await;
			println!("{}", pluck::format_result(&result, &FormatOptions::new(args.effective_format())));
			if result.success {
				status::info(&format!("Extracted {} item(s)", result.count));
			}
		}
		None => status::success(idle_message),
	}

	session.close().await
}

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::handler::Handler;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{CliError, Result};

/// Browser startup knobs surfaced by the `launch` command.
#[derive(Debug, Default, Clone)]
pub struct LaunchOptions {
	pub headful: bool,
	pub viewport: Option<(u32, u32)>,
	pub user_agent: Option<String>,
}

/// A running browser plus the page all commands operate on.
///
/// The CDP event handler is drained on a background task for the lifetime
/// of the session; dropping it without draining stalls every command.
pub struct BrowserSession {
	browser: Browser,
	handler_task: JoinHandle<()>,
	page: Page,
}

impl BrowserSession {
	/// Launch a new headless (by default) browser and open a blank page.
	pub async fn launch(options: LaunchOptions) -> Result<Self> {
		let mut config = BrowserConfig::builder();
		if options.headful {
			config = config.with_head();
		}
		if let Some((width, height)) = options.viewport {
			config = config.window_size(width, height);
		}
		if let Some(agent) = &options.user_agent {
			config = config.arg(format!("--user-agent={agent}"));
		}
		let config = config.build().map_err(CliError::BrowserLaunch)?;

		let (browser, handler) = Browser::launch(config)
			.await
			.map_err(|err| CliError::BrowserLaunch(err.to_string()))?;
		let handler_task = spawn_handler(handler);

		let page = browser
			.new_page("about:blank")
			.await
			.map_err(|err| CliError::BrowserLaunch(err.to_string()))?;
		debug!(target: "pluck", "browser launched");

		Ok(Self { browser, handler_task, page })
	}

	/// Attach to an already-running browser over its DevTools endpoint,
	/// reusing its first open page when there is one.
	pub async fn connect(endpoint: &str) -> Result<Self> {
		let connect_error = |message: String| CliError::Connect {
			endpoint: endpoint.to_string(),
			message,
		};

		let (browser, handler) = Browser::connect(endpoint)
			.await
			.map_err(|err| connect_error(err.to_string()))?;
		let handler_task = spawn_handler(handler);

		let existing = browser
			.pages()
			.await
			.map_err(|err| connect_error(err.to_string()))?;
		let page = match existing.into_iter().next() {
			Some(page) => page,
			None => browser
				.new_page("about:blank")
				.await
				.map_err(|err| connect_error(err.to_string()))?,
		};
		debug!(target: "pluck", endpoint, "attached to browser");

		Ok(Self { browser, handler_task, page })
	}

	/// Navigate the session page and wait for the load to settle.
	pub async fn goto(&self, url: &str) -> Result<()> {
		let navigation_error = |message: String| CliError::Navigation {
			url: url.to_string(),
			message,
		};

		self.page
			.goto(url)
			.await
			.map_err(|err| navigation_error(err.to_string()))?;
		self.page
			.wait_for_navigation()
			.await
			.map_err(|err| navigation_error(err.to_string()))?;
		Ok(())
	}

	pub fn page(&self) -> &Page {
		&self.page
	}

	/// Shut the browser down and stop the event handler task.
	pub async fn close(mut self) -> Result<()> {
		if let Err(err) = self.browser.close().await {
			debug!(target: "pluck", error = %err, "browser close failed");
		}
		let _ = self.browser.wait().await;
		self.handler_task.abort();
		Ok(())
	}
}

fn spawn_handler(mut handler: Handler) -> JoinHandle<()> {
	tokio::spawn(async move {
		while let Some(event) = handler.next().await {
			if event.is_err() {
				break;
			}
		}
	})
}

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::Page;
use pluck::{DocumentBackend, ExtractError, SelectorKind};
use tokio::time::{sleep, Instant};
use tracing::debug;

/// How often the wait loop re-queries the page for a selector match.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Extraction backend over a live CDP page. Values reflect the rendered
/// DOM, scripts included, and are reported exactly as the browser returns
/// them, without trimming.
pub struct LivePage {
	page: Page,
}

impl LivePage {
	pub fn new(page: Page) -> Self {
		Self { page }
	}
}

#[async_trait(?Send)]
impl DocumentBackend for LivePage {
	type Element = chromiumoxide::Element;

	fn backend_name(&self) -> &'static str {
		"live page"
	}

	async fn resolve(&self, selector: &str, kind: SelectorKind) -> pluck::error::Result<Vec<Self::Element>> {
		let found = match kind {
			SelectorKind::Css => self.page.find_elements(selector).await,
			SelectorKind::Xpath => self.page.find_xpaths(selector).await,
		};
		found.map_err(|err| ExtractError::Backend(err.to_string()))
	}

	async fn wait_for_match(&self, selector: &str, kind: SelectorKind, timeout: Duration) -> pluck::error::Result<()> {
		let deadline = Instant::now() + timeout;
		loop {
			// Transient resolution errors count as "no match yet"; the
			// page may still be mid-navigation.
			if let Ok(elements) = self.resolve(selector, kind).await {
				if !elements.is_empty() {
					return Ok(());
				}
			}
			if Instant::now() >= deadline {
				return Err(ExtractError::Timeout {
					ms: timeout.as_millis() as u64,
					selector: selector.to_string(),
				});
			}
			debug!(target: "pluck", selector, "selector not matched yet, polling");
			sleep(POLL_INTERVAL).await;
		}
	}

	async fn text(&self, element: &Self::Element) -> pluck::error::Result<Option<String>> {
		element
			.inner_text()
			.await
			.map_err(|err| ExtractError::Backend(err.to_string()))
	}

	async fn markup(&self, element: &Self::Element) -> pluck::error::Result<Option<String>> {
		element
			.inner_html()
			.await
			.map_err(|err| ExtractError::Backend(err.to_string()))
	}

	async fn attribute(&self, element: &Self::Element, name: &str) -> pluck::error::Result<Option<String>> {
		element
			.attribute(name)
			.await
			.map_err(|err| ExtractError::Backend(err.to_string()))
	}
}

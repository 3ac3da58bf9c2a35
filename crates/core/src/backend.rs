//! Document backend abstraction and the static HTML implementation.
//!
//! Live (rendered) and static (parsed string) documents both satisfy one
//! capability contract: resolve a selector, extract a value per element,
//! report match counts. The engine layers cardinality and error policy on
//! top without knowing which backend it is driving.

use std::time::Duration;

use async_trait::async_trait;
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::options::SelectorKind;

/// A queryable document, live or static.
///
/// `Element` is an opaque handle into the backend's document; it is
/// borrowed for the duration of one extraction call and never persisted.
/// `resolve` yields matches in document order, and an empty result set is
/// zero matches, not an error.
#[async_trait(?Send)]
pub trait DocumentBackend {
	type Element;

	/// Backend name used in error messages.
	fn backend_name(&self) -> &'static str;

	async fn resolve(&self, selector: &str, kind: SelectorKind) -> Result<Vec<Self::Element>>;

	/// Block until at least one match exists or the timeout elapses.
	///
	/// Live backends poll the document and fail with
	/// [`ExtractError::Timeout`]; the static backend has nothing to wait
	/// for and returns immediately.
	async fn wait_for_match(&self, selector: &str, kind: SelectorKind, timeout: Duration) -> Result<()>;

	async fn text(&self, element: &Self::Element) -> Result<Option<String>>;

	async fn markup(&self, element: &Self::Element) -> Result<Option<String>>;

	async fn attribute(&self, element: &Self::Element, name: &str) -> Result<Option<String>>;
}

/// Static backend over a parsed HTML string. CSS selectors only.
pub struct StaticDocument {
	html: Html,
}

impl StaticDocument {
	pub fn parse(html: &str) -> Self {
		Self {
			html: Html::parse_document(html),
		}
	}

	fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
		self.html.tree.get(id).and_then(ElementRef::wrap)
	}
}

#[async_trait(?Send)]
impl DocumentBackend for StaticDocument {
	type Element = NodeId;

	fn backend_name(&self) -> &'static str {
		"static HTML"
	}

	async fn resolve(&self, selector: &str, kind: SelectorKind) -> Result<Vec<NodeId>> {
		if kind == SelectorKind::Xpath {
			return Err(ExtractError::UnsupportedSelector {
				kind,
				backend: self.backend_name(),
			});
		}

		let parsed = Selector::parse(selector).map_err(|err| ExtractError::Selector(err.to_string()))?;
		Ok(self.html.select(&parsed).map(|el| el.id()).collect())
	}

	async fn wait_for_match(&self, _selector: &str, _kind: SelectorKind, _timeout: Duration) -> Result<()> {
		// A parsed string never changes; wait is ignored here.
		Ok(())
	}

	async fn text(&self, element: &NodeId) -> Result<Option<String>> {
		// Markup indentation is pure noise in a static document, so the
		// text value is trimmed and empty-after-trim collapses to None.
		Ok(self.element(*element).and_then(|el| {
			let text = el.text().collect::<String>();
			let trimmed = text.trim();
			if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
		}))
	}

	async fn markup(&self, element: &NodeId) -> Result<Option<String>> {
		Ok(self.element(*element).map(|el| el.inner_html()))
	}

	async fn attribute(&self, element: &NodeId, name: &str) -> Result<Option<String>> {
		Ok(self
			.element(*element)
			.and_then(|el| el.value().attr(name).map(ToString::to_string)))
	}
}

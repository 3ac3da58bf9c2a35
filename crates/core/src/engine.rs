//! Extraction engine: cardinality, wait policy and fault normalization.

use std::time::Duration;

use tracing::debug;

use crate::backend::{DocumentBackend, StaticDocument};
use crate::error::{ExtractError, Result};
use crate::options::{ExtractMode, ExtractionOptions};
use crate::result::{ExtractedData, ExtractionResult};

/// Run one extraction against any backend.
///
/// This is the single point translating raw backend faults into the
/// result taxonomy: every failure is captured into the returned
/// [`ExtractionResult`], never raised to the caller.
pub async fn extract<B: DocumentBackend>(backend: &B, options: &ExtractionOptions) -> ExtractionResult {
	match run(backend, options).await {
		Ok((data, count)) => ExtractionResult::ok(data, count),
		Err(err) => ExtractionResult::failure(err),
	}
}

/// Extract from an HTML string without suspending.
///
/// The static backend completes every future immediately, so driving the
/// shared engine to completion here cannot stall.
pub fn extract_from_html(html: &str, options: &ExtractionOptions) -> ExtractionResult {
	let document = StaticDocument::parse(html);
	futures::executor::block_on(extract(&document, options))
}

async fn run<B: DocumentBackend>(backend: &B, options: &ExtractionOptions) -> Result<(ExtractedData, usize)> {
	// The attribute name is deliberately not validated when options are
	// built; it is a contract violation only once extraction begins.
	if options.mode == ExtractMode::Attribute {
		attribute_name(options)?;
	}

	if options.wait {
		backend
			.wait_for_match(&options.selector, options.kind, Duration::from_millis(options.timeout_ms))
			.await?;
	}

	let elements = backend.resolve(&options.selector, options.kind).await?;
	debug!(
		target: "pluck",
		selector = %options.selector,
		backend = backend.backend_name(),
		matches = elements.len(),
		"resolved selector"
	);

	if options.multiple {
		// Per-element queries may complete in any order; join_all keeps
		// the output sequence in document order regardless.
		let extracted = futures::future::join_all(elements.iter().map(|element| extract_value(backend, element, options))).await;

		let mut values = Vec::new();
		for value in extracted {
			if let Some(value) = value? {
				if !value.is_empty() {
					values.push(value);
				}
			}
		}
		let count = values.len();
		Ok((ExtractedData::Many(values), count))
	} else {
		let Some(element) = elements.first() else {
			return Ok((ExtractedData::None, 0));
		};
		match extract_value(backend, element, options).await? {
			None => Ok((ExtractedData::None, 0)),
			Some(value) => {
				// A present-but-empty value (an empty attribute, say) is
				// reported as data but does not count as a result.
				let count = usize::from(!value.is_empty());
				Ok((ExtractedData::Single(value), count))
			}
		}
	}
}

async fn extract_value<B: DocumentBackend>(backend: &B, element: &B::Element, options: &ExtractionOptions) -> Result<Option<String>> {
	match options.mode {
		ExtractMode::Text => backend.text(element).await,
		ExtractMode::Markup => backend.markup(element).await,
		ExtractMode::Attribute => backend.attribute(element, attribute_name(options)?).await,
	}
}

fn attribute_name(options: &ExtractionOptions) -> Result<&str> {
	options
		.attribute
		.as_deref()
		.filter(|name| !name.is_empty())
		.ok_or(ExtractError::MissingAttributeName)
}

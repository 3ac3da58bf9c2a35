//! Extraction error taxonomy.
//!
//! Every failure inside the engine is caught at that boundary and folded
//! into [`crate::ExtractionResult::failure`]; callers never observe a
//! raised `ExtractError` from extraction itself.

use crate::options::SelectorKind;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
	/// Selector kind requested against a backend that cannot evaluate it.
	#[error("{kind} selectors are not supported by the {backend} backend; use CSS selectors or extract from a live page")]
	UnsupportedSelector { kind: SelectorKind, backend: &'static str },

	/// No match appeared within the configured wait budget.
	#[error("timed out after {ms}ms waiting for selector \"{selector}\"")]
	Timeout { ms: u64, selector: String },

	/// Attribute extraction was requested without an attribute name.
	#[error("attribute name required for attribute extraction")]
	MissingAttributeName,

	/// The backend rejected the selector syntax.
	#[error("invalid selector: {0}")]
	Selector(String),

	/// Any other fault surfaced by the underlying document capability.
	#[error("{0}")]
	Backend(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;

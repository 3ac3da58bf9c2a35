//! Selector-based content extraction and rendering.
//!
//! The pipeline resolves a selector against a document backend (a live,
//! script-rendered page or a statically parsed HTML string), extracts a
//! value per matched element, normalizes everything into one
//! [`ExtractionResult`] shape, and renders that result into a textual
//! output format, including a cleaned Markdown representation.
//!
//! Both backends satisfy the [`DocumentBackend`] capability; the engine
//! adds cardinality, wait and error policy without branching on which
//! backend it is driving.

pub mod backend;
pub mod engine;
pub mod error;
pub mod format;
pub mod markdown;
pub mod options;
pub mod result;

pub use backend::{DocumentBackend, StaticDocument};
pub use engine::{extract, extract_from_html};
pub use error::ExtractError;
pub use format::{FormatOptions, OutputFormat, format_result};
pub use markdown::html_to_markdown;
pub use options::{DEFAULT_TIMEOUT_MS, ExtractMode, ExtractionOptions, SelectorKind};
pub use result::{ExtractedData, ExtractionResult};

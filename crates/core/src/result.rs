//! Normalized extraction result model.

use serde::{Deserialize, Serialize};

/// Extracted payload: nothing, one value, or an ordered sequence.
///
/// Serializes untagged as `null`, a string, or an array, matching the
/// shape consumed by the JSON output format.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedData {
	#[default]
	None,
	Single(String),
	Many(Vec<String>),
}

impl ExtractedData {
	pub fn is_none(&self) -> bool {
		matches!(self, ExtractedData::None)
	}
}

/// The single normalized output of any extraction path.
///
/// Invariants:
/// - `success == false` implies `data == None`, `count == 0` and an error
///   message is present;
/// - single-cardinality results hold `None` or `Single`; `count` is 1 iff
///   the value is present and non-empty;
/// - multiple-cardinality results always hold `Many` (possibly empty) with
///   `count == len`, in document order of the matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
	pub success: bool,
	pub data: ExtractedData,
	pub count: usize,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

impl ExtractionResult {
	pub fn ok(data: ExtractedData, count: usize) -> Self {
		Self {
			success: true,
			data,
			count,
			error: None,
		}
	}

	pub fn failure(error: impl std::fmt::Display) -> Self {
		Self {
			success: false,
			data: ExtractedData::None,
			count: 0,
			error: Some(error.to_string()),
		}
	}
}

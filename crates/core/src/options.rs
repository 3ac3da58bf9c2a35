//! Extraction request descriptors.

/// Default timeout in milliseconds for waiting on a selector match.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// How the selector string should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectorKind {
	/// Structural CSS selector, supported by every backend.
	#[default]
	Css,
	/// Path-based XPath selector, supported by live backends only.
	Xpath,
}

impl std::fmt::Display for SelectorKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SelectorKind::Css => write!(f, "CSS"),
			SelectorKind::Xpath => write!(f, "XPath"),
		}
	}
}

/// What value to pull out of a matched element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
	/// Text content of the element.
	#[default]
	Text,
	/// Inner HTML of the element, unmodified.
	Markup,
	/// Value of a named attribute; requires [`ExtractionOptions::attribute`].
	Attribute,
}

/// Immutable request descriptor for one extraction call.
///
/// The attribute name is validated lazily, at the point a value is about
/// to be extracted, so options can be assembled incrementally before all
/// fields are known.
#[derive(Debug, Clone)]
pub struct ExtractionOptions {
	pub selector: String,
	pub kind: SelectorKind,
	pub mode: ExtractMode,
	pub attribute: Option<String>,
	pub multiple: bool,
	/// Wait for the first match to appear; live backends only.
	pub wait: bool,
	/// Upper bound for the wait, in milliseconds; live backends only.
	pub timeout_ms: u64,
}

impl ExtractionOptions {
	pub fn new(selector: impl Into<String>) -> Self {
		Self {
			selector: selector.into(),
			kind: SelectorKind::default(),
			mode: ExtractMode::default(),
			attribute: None,
			multiple: false,
			wait: true,
			timeout_ms: DEFAULT_TIMEOUT_MS,
		}
	}

	pub fn kind(mut self, kind: SelectorKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn mode(mut self, mode: ExtractMode) -> Self {
		self.mode = mode;
		self
	}

	pub fn attribute(mut self, name: impl Into<String>) -> Self {
		self.attribute = Some(name.into());
		self
	}

	pub fn multiple(mut self, multiple: bool) -> Self {
		self.multiple = multiple;
		self
	}

	pub fn wait(mut self, wait: bool) -> Self {
		self.wait = wait;
		self
	}

	pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeout_ms = timeout_ms;
		self
	}
}

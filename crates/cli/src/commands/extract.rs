use std::path::Path;

use pluck::FormatOptions;
use tracing::info;

use crate::cli::FileExtractionArgs;
use crate::error::{CliError, Result};
use crate::status;

/// Extract from a saved HTML file. No browser involved; the document is
/// parsed once and queried in place.
pub async fn execute(file: &Path, args: &FileExtractionArgs) -> Result<()> {
	let html = std::fs::read_to_string(file).map_err(|source| CliError::ReadFile {
		path: file.to_path_buf(),
		source,
	})?;
	info!(target: "pluck", file = %file.display(), bytes = html.len(), "extracting from file");

	let result = pluck::extract_from_html(&html, &args.to_options());
	println!("{}", pluck::format_result(&result, &FormatOptions::new(args.effective_format())));
	if result.success {
		status::info(&format!("Extracted {} item(s)", result.count));
	}
	Ok(())
}

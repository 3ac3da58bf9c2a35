use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
	#[error("failed to launch browser: {0}")]
	BrowserLaunch(String),

	#[error("failed to connect to {endpoint}: {message}")]
	Connect { endpoint: String, message: String },

	#[error("navigation to {url} failed: {message}")]
	Navigation { url: String, message: String },

	#[error("failed to read {}: {source}", path.display())]
	ReadFile {
		path: PathBuf,
		source: std::io::Error,
	},
}

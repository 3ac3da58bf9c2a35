use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Verbosity flags pick the default
/// filter; `RUST_LOG` overrides it when set. Logs go to stderr so the
/// extraction output on stdout stays machine-readable.
pub fn init_logging(verbose: u8) {
	let default_filter = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

use clap::Parser;
use pluck_cli::{cli::Cli, commands, logging, status};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = commands::dispatch(cli.command).await {
		status::error(&err.to_string());
		std::process::exit(1);
	}
}

//! hookplan: template-driven content-plan board generator.
//!
//! This is the main entry point for the `hookplan` CLI. It parses arguments,
//! installs the log subscriber, dispatches to the appropriate command handler,
//! and handles errors with proper exit codes.

use hookplan::cli::Cli;
use hookplan::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Default filter when neither RUST_LOG nor -v is given.
const DEFAULT_FILTER: &str = "hookplan=warn";

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => DEFAULT_FILTER,
        1 => "hookplan=info",
        2 => "hookplan=debug",
        _ => "hookplan=trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // Logs go to stderr so exports on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

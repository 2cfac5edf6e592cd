//! zigzag command-line interface
//!
//! Reads price data from CSV, runs pivot detection or one of the derived
//! analytics, and writes the result as CSV. Diagnostics go to stderr and are
//! controlled with `RUST_LOG` (e.g. `RUST_LOG=zigzag=debug`).

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use zigzag_cli::args::Args;
use zigzag_cli::commands;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zigzag=warn,zigzag_cli=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

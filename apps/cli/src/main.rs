//! # cutlist
//!
//! Command-line front end for the cutlist pricing engine.
//!
//! ## Invocation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    cutlist <command>                                    │
//! │                                                                         │
//! │  1. Initialize Tracing ─────────────────────────────────────────────►  │
//! │     • stderr, default INFO, overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Resolve Configuration ──────────────────────────────────────────►  │
//! │     • flags / CUTLIST_* variables / platform data directory             │
//! │                                                                         │
//! │  3. Run Command ────────────────────────────────────────────────────►  │
//! │     • load session cache, apply command, save if changed                │
//! │     • JSON result on stdout                                             │
//! │                                                                         │
//! │  On error: {code, message} JSON on stdout, one log line on stderr,      │
//! │            non-zero exit status                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod commands;
mod config;
mod error;
mod session;

use std::io;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use args::Cli;
use config::CliConfig;
use error::{CliResult, ErrorResponse};

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        error!(code = err.code().as_str(), "{err}");
        if let Err(e) = ErrorResponse::from(&err).write_to(&mut io::stdout().lock()) {
            error!("cannot write error response: {e}");
        }
        std::process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = CliConfig::load(cli.catalog, cli.session)?;
    let stdout = io::stdout();
    commands::execute(cli.command, &config, &mut stdout.lock())
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays clean JSON.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=warn` - Only warnings and errors
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

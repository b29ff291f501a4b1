//! # Latch CLI Entry Point
//!
//! The main entry point for the latch command-line tool, a one-shot agent
//! that resolves a host's stored credential and performs a single login and
//! logout against the host's management endpoint.

use anyhow::Result;
use clap::Parser;
use latch_cli::cli;
use latch_cli::utils::output::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  // Parse CLI arguments using the derive-based implementation
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let verbose_count = cmd.verbose;
  let level = match verbose_count {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Initialize the tracing subscriber with the specified level
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  if let Err(err) = cli::handle_cli(cmd) {
    print_error(&format!("{err:#}"));
    std::process::exit(1);
  }

  Ok(())
}

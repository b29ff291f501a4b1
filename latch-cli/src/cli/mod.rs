//! # Command Line Interface
//!
//! Defines the CLI structure for the latch tool. There is a single
//! operation, so the host name is a top-level argument rather than a
//! subcommand.

mod login;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};

use crate::utils::output::ColorMode;

/// Top-level CLI command for the latch tool
#[derive(Parser)]
#[command(name = "latch")]
#[command(display_name = "🔑 Latch")]
#[command(about = "Log in to a host's management endpoint with its stored credential")]
#[command(
  long_about = "Latch resolves the account stored for a host in your .netrc file and performs\n\
        a single login and logout against the host's management endpoint.\n\n\
        When the store holds no account for the host, or more than one, latch reports\n\
        that and exits without connecting; it never picks an account on its own."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())  // Make usage line stand out
    .literal(AnsiColor::BrightGreen.on_default().bold())  // Command names, flags bold
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Fully qualified domain name of the target host
  #[arg(
    long = "host-name",
    alias = "hostName",
    value_name = "FQDN",
    long_help = "Fully qualified domain name of the host whose management endpoint to log in to.\n\n\
             The credential for the host is looked up in your .netrc file; the host name\n\
             must match the machine name of the stored entry."
  )]
  pub host_name: String,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  // Set global color override based on --colors argument
  match cli.colors {
    ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
    ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
    ColorMode::Auto => {
      // Let owo_colors use its default auto-detection
      // Don't call set_override, allowing it to detect terminal automatically
    }
  }

  login::handle_login_command(&cli.host_name)
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_structure_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_cli_parses_host_name() {
    let cli = Cli::parse_from(["latch", "--host-name", "vc01.example.com"]);
    assert_eq!(cli.host_name, "vc01.example.com");
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.colors, ColorMode::Auto);
  }

  #[test]
  fn test_cli_accepts_camel_case_alias() {
    let cli = Cli::parse_from(["latch", "--hostName", "vc01.example.com"]);
    assert_eq!(cli.host_name, "vc01.example.com");
  }

  #[test]
  fn test_cli_requires_host_name() {
    let result = Cli::try_parse_from(["latch"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_cli_counts_verbosity() {
    let cli = Cli::parse_from(["latch", "-vv", "--host-name", "vc01.example.com"]);
    assert_eq!(cli.verbose, 2);
  }
}

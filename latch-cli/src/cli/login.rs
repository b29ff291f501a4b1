//! # Login Command
//!
//! Wires the netrc-backed credential store and the management session client
//! into the login engine, then reports the outcome of one run.

use anyhow::{Context, Result, bail};
use latch_core::{LoginAgent, LoginOutcome, NetrcStore};
use latch_vim::VimConnector;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::utils::output::{print_success, print_warning};

/// Handle the login run for the given host
pub(crate) fn handle_login_command(host_name: &str) -> Result<()> {
  if host_name.is_empty() {
    bail!("host name must not be empty");
  }

  let store = NetrcStore::discover().context("Failed to locate the credential store")?;
  debug!("Using credential store at {}", store.netrc_path().display());

  let connector = VimConnector::new().context("Failed to initialize the management client")?;
  let agent = LoginAgent::new(store, connector);

  // Create a runtime for the async login cycle
  let rt = Runtime::new().context("Failed to create async runtime")?;

  match rt.block_on(agent.run(host_name))? {
    outcome @ LoginOutcome::Connected { .. } => print_success(&outcome.to_string()),
    outcome => print_warning(&outcome.to_string()),
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_host_name_is_rejected() {
    let result = handle_login_command("");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("host name must not be empty"));
  }
}

//! # Login Engine
//!
//! Resolves exactly one stored credential for a host and performs a single
//! login/logout cycle against the host's management endpoint. Zero or many
//! stored usernames are normal end states reported back to the caller; the
//! engine never picks a username on its own. Failures keep the identity of
//! the collaborator that produced them.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::consts::service_url;
use crate::creds::CredentialStore;
use crate::session::{Connector, SessionHandle};

/// Result of resolving a host against the credential store.
///
/// The 0/1/many decision is spelled out as its own type so every branch is
/// handled exhaustively rather than by ad hoc size checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialLookup {
  /// No username is stored for the host
  NoCredential,
  /// Two or more usernames are stored for the host
  Ambiguous(BTreeSet<String>),
  /// Exactly one username is stored for the host
  Found(String),
}

/// Classifies a set of stored usernames by cardinality.
///
/// Only the size of the set matters; with several usernames none of them is
/// preferred over the others.
pub fn resolve_usernames(usernames: BTreeSet<String>) -> CredentialLookup {
  if usernames.len() > 1 {
    return CredentialLookup::Ambiguous(usernames);
  }

  match usernames.into_iter().next() {
    Some(username) => CredentialLookup::Found(username),
    None => CredentialLookup::NoCredential,
  }
}

/// Non-fatal end states of a login run.
///
/// The [`Display`](fmt::Display) implementation renders the exact line the
/// CLI prints for each state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
  /// The store holds no credential for the host; no connection was attempted
  NoCredential { host: String },
  /// The store holds several credentials for the host; no connection was
  /// attempted
  Ambiguous { host: String, usernames: BTreeSet<String> },
  /// One full login/logout cycle completed against the host
  Connected { identity: String },
}

impl fmt::Display for LoginOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoCredential { host } => write!(f, "no credential found for host '{host}'"),
      Self::Ambiguous { host, usernames } => {
        write!(f, "ambiguous credential: {} users stored for host '{host}'", usernames.len())
      }
      Self::Connected { identity } => write!(f, "Connected Successfully {identity}"),
    }
  }
}

/// Fatal failures of a login run, keyed by the collaborator that failed
#[derive(Debug, Error)]
pub enum AgentError {
  /// The credential store could not be read, or the resolved entry had no
  /// usable password
  #[error("credential store failure")]
  Store(#[source] anyhow::Error),
  /// Opening the session failed; nothing was logged in, so there is nothing
  /// to clean up
  #[error("connection failure")]
  Connect(#[source] anyhow::Error),
  /// A failure after a successful login. The session is always closed (or a
  /// close attempted) before this error surfaces
  #[error("session failure")]
  Session(#[source] anyhow::Error),
}

/// Performs one credential-resolved login cycle per [`run`](Self::run) call.
///
/// Both collaborators are injected at construction, so the engine can be
/// exercised end to end against in-memory doubles.
pub struct LoginAgent<S, C> {
  store: S,
  connector: C,
}

impl<S: CredentialStore, C: Connector> LoginAgent<S, C> {
  /// Creates an agent over the given store and connector.
  pub fn new(store: S, connector: C) -> Self {
    Self { store, connector }
  }

  /// Resolves one credential for `host` and runs a login/logout cycle.
  ///
  /// Zero or multiple stored usernames end the run early with the matching
  /// informational [`LoginOutcome`]; no connection is attempted. With
  /// exactly one username the agent fetches its password, logs in to the
  /// host's management endpoint, reads the service identity, and logs out.
  /// Once a session is open it is closed on every path out of this
  /// function.
  #[instrument(skip(self), level = "debug")]
  pub async fn run(&self, host: &str) -> Result<LoginOutcome, AgentError> {
    let usernames = self.store.usernames(host).map_err(AgentError::Store)?;
    debug!("Found {} stored username(s) for {host}", usernames.len());

    let username = match resolve_usernames(usernames) {
      CredentialLookup::NoCredential => {
        return Ok(LoginOutcome::NoCredential { host: host.to_string() });
      }
      CredentialLookup::Ambiguous(usernames) => {
        return Ok(LoginOutcome::Ambiguous {
          host: host.to_string(),
          usernames,
        });
      }
      CredentialLookup::Found(username) => username,
    };

    let password = self.store.password(host, &username).map_err(AgentError::Store)?;

    let endpoint = service_url(host);
    debug!("Logging in to {endpoint} as {username}");

    let session = self
      .connector
      .open(&endpoint, &username, &password)
      .await
      .map_err(AgentError::Connect)?;

    // The password is only needed for the open; wipe it before going on
    drop(password);

    let identity = match session.identity_label().await {
      Ok(identity) => identity,
      Err(err) => {
        // Cleanup precedes propagation: the session must not outlive the run
        if let Err(close_err) = session.close().await {
          debug!("Logout after failed identity read also failed: {close_err:#}");
        }
        return Err(AgentError::Session(err));
      }
    };

    session.close().await.map_err(AgentError::Session)?;
    debug!("Logged out of {endpoint}");

    Ok(LoginOutcome::Connected { identity })
  }
}

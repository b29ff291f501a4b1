//! # Credential Store Access
//!
//! Read-only access to stored credentials, keyed by host. The login engine
//! only ever consumes the [`CredentialStore`] capability; the hosting process
//! decides which backing store to construct. The built-in backend reads
//! `.netrc` files.

pub mod netrc;

// Platform-specific permission checks
pub mod platform;

use std::collections::BTreeSet;

use anyhow::Result;
use zeroize::Zeroizing;

/// Read-only view of a credential store
pub trait CredentialStore {
  /// Returns every username with a stored password for the given host.
  ///
  /// An empty set means the store holds nothing for the host; that is a
  /// normal answer, not an error. Errors are reserved for the store itself
  /// being unreadable.
  fn usernames(&self, host: &str) -> Result<BTreeSet<String>>;

  /// Returns the stored password for a `(host, username)` pair.
  ///
  /// # Errors
  ///
  /// Returns an error when the pair has no stored password or the store
  /// cannot be read.
  fn password(&self, host: &str, username: &str) -> Result<Zeroizing<String>>;
}

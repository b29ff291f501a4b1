//! # Management Session Capability
//!
//! The remote-connection seam consumed by the login engine. A [`Connector`]
//! opens an authenticated session against a management endpoint URL, and the
//! resulting [`SessionHandle`] exposes the two things the engine needs: one
//! piece of identity metadata and an explicit close. `close` takes the handle
//! by value, so a session cannot be reused after logout or closed twice.

use anyhow::Result;

/// Opens authenticated sessions against a management endpoint
#[allow(async_fn_in_trait)]
pub trait Connector {
  /// Session type produced by a successful [`open`](Self::open)
  type Session: SessionHandle;

  /// Logs in to the service at `endpoint` with the given credentials.
  ///
  /// # Errors
  ///
  /// Returns an error when the endpoint is unreachable or the service
  /// rejects the credentials. No session exists after a failed open.
  async fn open(&self, endpoint: &str, username: &str, password: &str) -> Result<Self::Session>;
}

/// An open, authenticated session with a management service
#[allow(async_fn_in_trait)]
pub trait SessionHandle {
  /// Returns a human-readable identification of the connected service.
  async fn identity_label(&self) -> Result<String>;

  /// Logs out and releases the session.
  async fn close(self) -> Result<()>;
}

//! Wire models for the management session API.

use serde::Deserialize;

/// Session token returned by a successful login
#[derive(Debug, Deserialize)]
pub struct SessionToken {
  pub value: String,
}

/// Service identification reported by the `about` resource
#[derive(Debug, Deserialize)]
pub struct AboutInfo {
  /// Full product name, e.g. "Acme vCenter 8.0"
  pub full_name: String,
  /// Product version, when the service reports one
  pub version: Option<String>,
  /// Vendor name, when the service reports one
  pub vendor: Option<String>,
}

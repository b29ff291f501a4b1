//! Core constants shared across latch components.

/// URL scheme used for every management endpoint
pub const SERVICE_SCHEME: &str = "https";

/// Well-known path of the management service beneath the target host
pub const SERVICE_PATH: &str = "/sdk/vimService";

/// Builds the management endpoint URL for a host.
///
/// The scheme and service path are fixed; only the host varies between runs.
pub fn service_url(host: &str) -> String {
  format!("{SERVICE_SCHEME}://{host}{SERVICE_PATH}")
}

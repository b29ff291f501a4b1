//! Platform-specific checks for credential file permissions.

use std::path::Path;

use anyhow::Result;

/// Checks whether the credential file is only accessible by its owner.
#[cfg(unix)]
pub fn has_secure_permissions(path: &Path) -> Result<bool> {
  use std::os::unix::fs::PermissionsExt;

  use anyhow::Context;

  let metadata = std::fs::metadata(path).context("Failed to get file metadata")?;
  let mode = metadata.permissions().mode();

  // Only the owner may hold any permission bits (no group/other permissions)
  Ok(mode & 0o077 == 0)
}

/// Non-Unix platforms expose no simple mode bits to inspect, so the file is
/// reported as secure and access control is left to the platform.
#[cfg(not(unix))]
pub fn has_secure_permissions(_path: &Path) -> Result<bool> {
  Ok(true)
}

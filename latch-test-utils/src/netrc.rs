//! Netrc file fixtures for tests.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary home directory holding a `.netrc` file with the given content.
///
/// The fixture owns the directory, so everything disappears when it is
/// dropped. Library tests point a store directly at
/// [`netrc_path`](NetrcFixture::netrc_path); CLI tests point a spawned
/// binary's `HOME` at [`home_dir`](NetrcFixture::home_dir), which avoids
/// mutating the test process environment.
pub struct NetrcFixture {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcFixture {
  /// Creates the fixture and writes `content` into `<home>/.netrc`.
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    let mut file = fs::File::create(&netrc_path).expect("Failed to create test .netrc");
    file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

    Self { temp_dir, netrc_path }
  }

  /// Tightens the netrc file to owner-only permissions (no-op off Unix).
  pub fn secure(self) -> Self {
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;

      let mut perms = fs::metadata(&self.netrc_path)
        .expect("Failed to get test .netrc metadata")
        .permissions();
      perms.set_mode(0o600);
      fs::set_permissions(&self.netrc_path, perms).expect("Failed to set test .netrc permissions");
    }
    self
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

//! Helpers for reading credentials stored in `.netrc` files.
//!
//! A host may carry any number of entries, so the parser collects every
//! complete `machine`/`login`/`password` triple instead of stopping at the
//! first match. The [`NetrcStore`] wraps these helpers behind the
//! [`CredentialStore`] capability consumed by the login engine.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::creds::{CredentialStore, platform};

/// One complete entry parsed out of a `.netrc` file.
#[derive(Debug)]
struct NetrcEntry {
  machine: String,
  login: String,
  password: Zeroizing<String>,
}

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Arguments
///
/// * `home` - The user's home directory, typically from
///   `directories::BaseDirs::home_dir`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use latch_core::creds::netrc::get_netrc_path;
///
/// let home = Path::new("/home/user");
/// let path = get_netrc_path(home);
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parses a `.netrc` file and returns every username stored for the machine.
///
/// The parser supports both single-line (`machine host login user password pass`)
/// and multi-line formats. Entries missing a `login` or `password` value are
/// skipped. A machine listed several times contributes each of its logins, so
/// the result is a set with no meaningful order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn machine_usernames(path: &Path, machine: &str) -> Result<BTreeSet<String>> {
  let entries = parse_netrc_entries(path)?;
  Ok(
    entries
      .into_iter()
      .filter(|entry| entry.machine == machine)
      .map(|entry| entry.login)
      .collect(),
  )
}

/// Parses a `.netrc` file and returns the password stored for a machine/login
/// pair.
///
/// When the same pair appears more than once, the entry closest to the top of
/// the file wins, which mirrors how other netrc consumers resolve duplicates.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn machine_password(path: &Path, machine: &str, login: &str) -> Result<Option<Zeroizing<String>>> {
  let entries = parse_netrc_entries(path)?;
  Ok(
    entries
      .into_iter()
      .find(|entry| entry.machine == machine && entry.login == login)
      .map(|entry| entry.password),
  )
}

/// Tokenizes the file and collects every complete entry in order.
fn parse_netrc_entries(path: &Path) -> Result<Vec<NetrcEntry>> {
  let file = File::open(path).context("Failed to open .netrc file")?;
  let reader = BufReader::new(file);

  let mut entries = Vec::new();
  let mut machine = String::new();
  let mut login = String::new();
  let mut password = String::new();

  for line in reader.lines() {
    let line = line.context("Failed to read line from .netrc")?;
    let parts: Vec<&str> = line.split_whitespace().collect();

    for i in 0..parts.len() {
      match parts[i] {
        "machine" if i + 1 < parts.len() => {
          // A new machine token seals whatever entry was accumulating
          seal_entry(&mut entries, &machine, &mut login, &mut password);
          machine = parts[i + 1].to_string();
        }
        "login" if i + 1 < parts.len() => {
          // A second login under the same machine starts another entry
          if !login.is_empty() {
            seal_entry(&mut entries, &machine, &mut login, &mut password);
          }
          login = parts[i + 1].to_string();
        }
        "password" if i + 1 < parts.len() => {
          password = parts[i + 1].to_string();
        }
        _ => {}
      }
    }
  }

  // Seal the last entry in the file
  seal_entry(&mut entries, &machine, &mut login, &mut password);

  Ok(entries)
}

/// Pushes the accumulated triple when complete; incomplete triples are
/// dropped either way.
fn seal_entry(entries: &mut Vec<NetrcEntry>, machine: &str, login: &mut String, password: &mut String) {
  if !machine.is_empty() && !login.is_empty() && !password.is_empty() {
    entries.push(NetrcEntry {
      machine: machine.to_string(),
      login: std::mem::take(login),
      password: Zeroizing::new(std::mem::take(password)),
    });
  } else {
    login.clear();
    password.clear();
  }
}

/// Credential store backed by a `.netrc` file.
///
/// A missing file is treated as an empty store so hosts without any stored
/// credential resolve to "no credential" rather than an I/O error.
pub struct NetrcStore {
  netrc_path: PathBuf,
}

impl NetrcStore {
  /// Creates a store backed by an explicit netrc file path.
  pub fn new(netrc_path: impl Into<PathBuf>) -> Self {
    Self {
      netrc_path: netrc_path.into(),
    }
  }

  /// Creates a store backed by the current user's `~/.netrc`.
  pub fn discover() -> Result<Self> {
    let base_dirs = BaseDirs::new().context("Could not determine home directory")?;
    Ok(Self::new(get_netrc_path(base_dirs.home_dir())))
  }

  /// Path of the backing netrc file.
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }
}

impl CredentialStore for NetrcStore {
  fn usernames(&self, host: &str) -> Result<BTreeSet<String>> {
    if !self.netrc_path.exists() {
      debug!("No .netrc file at {}, treating store as empty", self.netrc_path.display());
      return Ok(BTreeSet::new());
    }

    if !platform::has_secure_permissions(&self.netrc_path)? {
      warn!(
        ".netrc file at {} is readable by group/others; consider chmod 600",
        self.netrc_path.display()
      );
    }

    machine_usernames(&self.netrc_path, host)
  }

  fn password(&self, host: &str, username: &str) -> Result<Zeroizing<String>> {
    machine_password(&self.netrc_path, host, username)?
      .with_context(|| format!("No password stored for user '{username}' on host '{host}'"))
  }
}

#[cfg(test)]
mod tests {
  use latch_test_utils::NetrcFixture;
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_machine_usernames_basic() {
    let content = r#"machine example.com
  login testuser
  password testpass
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("testuser"));
  }

  #[test]
  fn test_machine_usernames_multiple_machines() {
    let content = r#"machine example.com
  login user1
  password pass1

machine vc01.example.com
  login user2
  password pass2

machine vc02.example.com
  login user3
  password pass3
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("user2"));

    let usernames = machine_usernames(fixture.netrc_path(), "vc02.example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("user3"));
  }

  #[test]
  fn test_machine_usernames_repeated_machine_collects_all_logins() {
    let content = r#"machine vc01.example.com
  login alice
  password alicepass

machine vc01.example.com
  login bob
  password bobpass
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert_eq!(usernames.len(), 2);
    assert!(usernames.contains("alice"));
    assert!(usernames.contains("bob"));
  }

  #[test]
  fn test_machine_usernames_duplicate_login_counted_once() {
    let content = r#"machine vc01.example.com login admin password first
machine vc01.example.com login admin password second
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("admin"));
  }

  #[test]
  fn test_machine_usernames_machine_not_found() {
    let content = r#"machine example.com
  login testuser
  password testpass
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "nonexistent.com").unwrap();
    assert!(usernames.is_empty());
  }

  #[test]
  fn test_machine_usernames_incomplete_entry_skipped() {
    let content = r#"machine example.com
  login testuser
machine vc01.example.com
  login user2
  password pass2
"#;

    let fixture = NetrcFixture::new(content);

    // example.com has no password, so it contributes nothing
    let usernames = machine_usernames(fixture.netrc_path(), "example.com").unwrap();
    assert!(usernames.is_empty());

    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("user2"));
  }

  #[test]
  fn test_machine_usernames_single_line_format() {
    let content = "machine example.com login testuser password testpass\n";

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "example.com").unwrap();
    assert_eq!(usernames.len(), 1);
    assert!(usernames.contains("testuser"));
  }

  #[test]
  fn test_machine_usernames_mixed_format() {
    let content = r#"machine example.com login user1 password pass1
machine vc01.example.com
  login user2
  password pass2
machine vc02.example.com login user3
  password pass3
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "example.com").unwrap();
    assert!(usernames.contains("user1"));

    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert!(usernames.contains("user2"));

    let usernames = machine_usernames(fixture.netrc_path(), "vc02.example.com").unwrap();
    assert!(usernames.contains("user3"));
  }

  #[test]
  fn test_machine_usernames_empty_file() {
    let fixture = NetrcFixture::new("");

    let usernames = machine_usernames(fixture.netrc_path(), "example.com").unwrap();
    assert!(usernames.is_empty());
  }

  #[test]
  fn test_machine_usernames_malformed_entries() {
    let content = r#"machine incomplete.example.com
  login orphan
  # missing password

machine vc01.example.com
  login testuser
  password secret
  some-invalid-line
"#;

    let fixture = NetrcFixture::new(content);

    let usernames = machine_usernames(fixture.netrc_path(), "incomplete.example.com").unwrap();
    assert!(usernames.is_empty());

    // Extra tokens between entries are ignored
    let usernames = machine_usernames(fixture.netrc_path(), "vc01.example.com").unwrap();
    assert!(usernames.contains("testuser"));
  }

  #[test]
  fn test_machine_password_basic() {
    let content = r#"machine vc01.example.com
  login svc-account
  password hunter2
"#;

    let fixture = NetrcFixture::new(content);

    let password = machine_password(fixture.netrc_path(), "vc01.example.com", "svc-account")
      .unwrap()
      .expect("entry should be found");
    assert_eq!(password.as_str(), "hunter2");
  }

  #[test]
  fn test_machine_password_picks_matching_login() {
    let content = r#"machine vc01.example.com login alice password alicepass
machine vc01.example.com login bob password bobpass
"#;

    let fixture = NetrcFixture::new(content);

    let password = machine_password(fixture.netrc_path(), "vc01.example.com", "bob")
      .unwrap()
      .expect("entry should be found");
    assert_eq!(password.as_str(), "bobpass");
  }

  #[test]
  fn test_machine_password_first_duplicate_wins() {
    let content = r#"machine vc01.example.com login admin password first
machine vc01.example.com login admin password second
"#;

    let fixture = NetrcFixture::new(content);

    let password = machine_password(fixture.netrc_path(), "vc01.example.com", "admin")
      .unwrap()
      .expect("entry should be found");
    assert_eq!(password.as_str(), "first");
  }

  #[test]
  fn test_machine_password_missing_pair() {
    let content = "machine vc01.example.com login alice password alicepass\n";

    let fixture = NetrcFixture::new(content);

    let password = machine_password(fixture.netrc_path(), "vc01.example.com", "bob").unwrap();
    assert!(password.is_none());
  }

  #[test]
  fn test_netrc_store_missing_file_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = NetrcStore::new(temp_dir.path().join(".netrc"));

    let usernames = store.usernames("vc01.example.com").unwrap();
    assert!(usernames.is_empty());
  }

  #[test]
  fn test_netrc_store_reads_fixture() {
    let content = r#"machine vc01.example.com
  login svc-account
  password hunter2
"#;

    let fixture = NetrcFixture::new(content).secure();
    let store = NetrcStore::new(fixture.netrc_path());

    let usernames = store.usernames("vc01.example.com").unwrap();
    assert_eq!(usernames.len(), 1);

    let password = store.password("vc01.example.com", "svc-account").unwrap();
    assert_eq!(password.as_str(), "hunter2");
  }

  #[test]
  fn test_netrc_store_password_missing_pair_is_error() {
    let content = "machine vc01.example.com login alice password alicepass\n";

    let fixture = NetrcFixture::new(content).secure();
    let store = NetrcStore::new(fixture.netrc_path());

    let result = store.password("vc01.example.com", "missing");
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("missing"));
    assert!(message.contains("vc01.example.com"));
  }
}

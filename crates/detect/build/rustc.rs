//! `rustc --version` parsing and the version-to-edition table.
//!
//! Shared by the build script and the crate's unit tests, so it only uses
//! explicit `std` paths.

use std::{borrow::ToOwned, fmt, io, string::String};

// ─────────────────────────────────────────────────────────────────────────────
// rustc Version
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RustcVersion {
  pub major: u32,
  pub minor: u32,
}

impl RustcVersion {
  /// Parse the first line of `rustc --version`, e.g.
  /// `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
  pub fn parse(output: &str) -> Result<Self, ProbeError> {
    let malformed = || ProbeError::Malformed(output.trim().to_owned());

    let mut words = output.split_whitespace();
    if words.next() != Some("rustc") {
      return Err(malformed());
    }
    let release = words.next().ok_or_else(malformed)?;
    // Drop pre-release suffixes such as `-nightly` or `-beta.3`.
    let release = release.split('-').next().unwrap_or(release);

    let mut parts = release.split('.');
    let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
    let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
    Ok(Self { major, minor })
  }

  /// Newest edition this compiler implements.
  pub fn newest_edition(self) -> u16 {
    match (self.major, self.minor) {
      (1, 85..) => 2024,
      (1, 56..) => 2021,
      (1, 31..) => 2018,
      (1, _) => 2015,
      // A hypothetical 2.x still knows everything 1.85 did.
      _ => 2024,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Probe Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ProbeError {
  Spawn(io::Error),
  Exit(Option<i32>),
  Utf8,
  Malformed(String),
}

impl fmt::Display for ProbeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Spawn(err) => write!(f, "could not run rustc: {err}"),
      Self::Exit(Some(code)) => write!(f, "rustc --version exited with status {code}"),
      Self::Exit(None) => f.write_str("rustc --version was terminated by a signal"),
      Self::Utf8 => f.write_str("rustc --version printed invalid UTF-8"),
      Self::Malformed(line) => write!(f, "unrecognized rustc version string {line:?}"),
    }
  }
}

impl std::error::Error for ProbeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Spawn(err) => Some(err),
      _ => None,
    }
  }
}

//! Operating system.
//!
//! Exactly one tag holds on a recognized target. Precedence between the
//! overlapping signals:
//!
//! - Android is its own `target_os`, so [`Linux`] never holds on it.
//! - [`Unix`] is the fallback for unix-family targets that are none of
//!   Linux, Android, macOS or iOS (the BSDs, tvOS, Solaris, ...).
//!
//! Targets outside all rules (wasm, UEFI, bare metal, unikernels) report no OS.

use crate::{
  rule::Clause,
  signals::os::{ANDROID, IOS, LINUX, MACOS, UNIX, WINDOWS},
  tag::catalogue,
};

catalogue! {
  /// Operating system category.
  category Os("os", exclusive = true);

  /// Does OS tag `T` hold for this build?
  query is_os;

  Windows("windows") => IS_WINDOWS [Clause::when(WINDOWS)];
  Linux("linux") => IS_LINUX [Clause::when(LINUX).unless(ANDROID)];
  Macos("macos") => IS_MACOS [Clause::when(MACOS)];
  Ios("ios") => IS_IOS [Clause::when(IOS)];
  Android("android") => IS_ANDROID [Clause::when(ANDROID)];
  /// A unix-like system not covered by a more specific tag.
  Unix("unix") => IS_UNIX [Clause::when(UNIX).unless(LINUX.union(ANDROID).union(MACOS).union(IOS))];
}

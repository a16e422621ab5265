//! C toolchain family.
//!
//! Rust targets are ABI-compatible with exactly one C toolchain; this family
//! names it. Precedence:
//!
//! - [`Msvc`]: `target_env = "msvc"`.
//! - [`Clang`]: the LLVM MinGW ABI (`*-windows-gnullvm`), Apple, Android,
//!   FreeBSD, OpenBSD, and the wasm family.
//! - [`Mingw`]: legacy 32-bit MinGW (`i686-pc-windows-gnu`).
//! - [`Gcc`]: every other GNU or musl environment, 64-bit MinGW-w64 included.
//!
//! Targets that fit none of these (NetBSD, bare metal, ...) report no compiler.

use crate::{
  rule::Clause,
  signals::{
    arch::{POINTER_32, POINTER_64, WASM},
    env::{GNU, LLVM_ABI, MSVC, MUSL},
    os::{ANDROID, FREEBSD, OPENBSD, WINDOWS},
    vendor::APPLE,
  },
  tag::catalogue,
};

catalogue! {
  /// Compiler category.
  category Compiler("compiler", exclusive = true);

  /// Does compiler tag `T` hold for this build?
  query is_compiler;

  Gcc("gcc") => IS_GCC [
    Clause::when(GNU).unless(WINDOWS.union(LLVM_ABI)),
    Clause::when(GNU.union(WINDOWS).union(POINTER_64)).unless(LLVM_ABI),
    Clause::when(MUSL).unless(LLVM_ABI),
  ];
  Clang("clang") => IS_CLANG [
    Clause::when(LLVM_ABI),
    Clause::when(APPLE),
    Clause::when(ANDROID),
    Clause::when(FREEBSD),
    Clause::when(OPENBSD),
    Clause::when(WASM),
  ];
  Msvc("msvc") => IS_MSVC [Clause::when(MSVC)];
  /// 32-bit MinGW. 64-bit MinGW-w64 reports [`Gcc`].
  Mingw("mingw") => IS_MINGW [Clause::when(WINDOWS.union(GNU).union(POINTER_32)).unless(LLVM_ABI)];
}

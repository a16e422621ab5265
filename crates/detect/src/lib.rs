//! Compile-time capability matrix.
//!
//! A fixed set of boolean predicates, resolved before the program runs, that
//! say which operating system, C toolchain family, language edition, build
//! mode and SIMD extensions the current build targets.
//!
//! # Core Types
//!
//! - Tags: uninhabited types such as [`os::Windows`] or [`simd::Avx2`], one per
//!   recognizable value. They are keys, never values.
//! - [`Capability`]: links a tag to its [`Category`] and its override
//!   [`Rule`](rule::Rule). Without an override a tag is false.
//! - [`is`]: the generic query, `is::<Category, Tag>()`.
//! - `IS_*` constants: one per tag, equal to [`is`] at that tag.
//!
//! # Usage
//!
//! ```
//! use detect::{IS_AVX2, IS_WINDOWS, is_simd, simd};
//!
//! fn path_separator() -> char {
//!   if IS_WINDOWS { '\\' } else { '/' }
//! }
//!
//! // Both spellings are the same compile-time constant.
//! assert_eq!(IS_AVX2, is_simd::<simd::Avx2>());
//! # let _ = path_separator();
//! ```
//!
//! Every value is a `const`, so the untaken branch of an `if` on it is
//! removed by the compiler.
//!
//! # Under-detection
//!
//! A platform, toolchain or feature that no rule covers reports `false`
//! rather than failing the build. On an unrecognized OS every [`os`] tag is
//! false; callers that need an answer must handle that case.
//!
//! # Families
//!
//! | Module | Category | Exclusive | Query |
//! |---|---|---|---|
//! | [`os`] | [`os::Os`] | yes | [`is_os`] |
//! | [`compiler`] | [`compiler::Compiler`] | yes | [`is_compiler`] |
//! | [`standard`] | [`standard::Standard`] | yes | [`is_std`] |
//! | [`profile`] | [`profile::BuildMode`] | yes | [`is_build`] |
//! | [`simd`] | [`simd::Simd`] | no | [`is_simd`] |
//!
//! A tag can only be queried through its own family:
//!
//! ```compile_fail
//! const NOPE: bool = detect::is_os::<detect::simd::Avx2>();
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod rule;
pub mod signals;
pub mod tag;

// ─────────────────────────────────────────────────────────────────────────────
// Families
// ─────────────────────────────────────────────────────────────────────────────

pub mod compiler;
pub mod os;
pub mod profile;
pub mod simd;
pub mod standard;

// Version parsing shared with the build script.
#[cfg(test)]
#[allow(dead_code)]
#[path = "../build/rustc.rs"]
mod rustc;

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

pub use compiler::{IS_CLANG, IS_GCC, IS_MINGW, IS_MSVC, is_compiler};
pub use os::{IS_ANDROID, IS_IOS, IS_LINUX, IS_MACOS, IS_UNIX, IS_WINDOWS, is_os};
pub use profile::{IS_DEBUG, IS_RELEASE, is_build};
pub use signals::Signals;
pub use simd::{
  IS_AVX, IS_AVX2, IS_AVX512F, IS_FMA, IS_NEON, IS_SIMD128, IS_SSE, IS_SSE2, IS_SSE3, IS_SSE41, IS_SSE42, IS_SSSE3,
  IS_X86_SSE, IS_X86_SSE2, is_simd,
};
pub use standard::{IS_EDITION_2015, IS_EDITION_2018, IS_EDITION_2021, IS_EDITION_2024, is_std};
pub use tag::{Capability, Category, Entry, Family, holds_under, is};

/// All five families, in the order of the table above.
pub const FAMILIES: [Family; 5] = [os::FAMILY, compiler::FAMILY, standard::FAMILY, profile::FAMILY, simd::FAMILY];

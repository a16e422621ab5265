//! Raw toolchain signals.
//!
//! A [`Signals`] value is a snapshot of everything the compiler told us about
//! the build: target OS and environment, architecture, pointer width, build
//! profile, enabled `target_feature`s, and the newest language edition the
//! compiling `rustc` implements.
//!
//! [`Signals::CURRENT`] is the snapshot for this build. It is assembled from
//! `cfg!()` inside a `const fn`, so it is a compile-time literal and nothing
//! here ever runs at program start.
//!
//! # Flag Layout
//!
//! - Bits 0-7: operating system
//! - Bits 8-11: target environment and ABI
//! - Bit 12: vendor
//! - Bits 13-19: architecture and pointer width
//! - Bit 20: build profile
//! - Bits 21-32: SIMD target features

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Flag Set
// ─────────────────────────────────────────────────────────────────────────────

/// A set of toolchain flags.
///
/// The named constants in [`os`], [`env`], [`vendor`], [`arch`], [`profile`]
/// and [`feature`] each set a single bit; combine them with
/// [`union`](Flags::union) or `|`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Flags(u64);

impl Flags {
  /// Empty flag set.
  pub const NONE: Self = Self(0);

  /// Create a flag set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Check if all flags in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Check if any flag in `other` is present.
  #[inline(always)]
  #[must_use]
  pub const fn intersects(self, other: Self) -> bool {
    (self.0 & other.0) != 0
  }

  /// Union of two flag sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Flags in `self` that are not in `other`.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if the flag set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Count the number of flags present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Returns an iterator over the names of all set flags.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    FLAG_NAMES
      .iter()
      .filter(move |(flag, _)| self.has(*flag))
      .map(|(_, name)| *name)
  }
}

impl core::ops::BitOr for Flags {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Flags {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl fmt::Debug for Flags {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.names()).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Named Flags
// ─────────────────────────────────────────────────────────────────────────────

/// `target_os` and `target_family = "unix"`.
pub mod os {
  use super::Flags;

  pub const WINDOWS: Flags = Flags::bit(0);
  pub const LINUX: Flags = Flags::bit(1);
  pub const ANDROID: Flags = Flags::bit(2);
  pub const MACOS: Flags = Flags::bit(3);
  pub const IOS: Flags = Flags::bit(4);
  pub const FREEBSD: Flags = Flags::bit(5);
  pub const OPENBSD: Flags = Flags::bit(6);
  /// Any member of the unix target family.
  pub const UNIX: Flags = Flags::bit(7);
}

/// `target_env`, plus the LLVM-based MinGW ABI.
pub mod env {
  use super::Flags;

  pub const GNU: Flags = Flags::bit(8);
  pub const MSVC: Flags = Flags::bit(9);
  pub const MUSL: Flags = Flags::bit(10);
  /// `target_abi = "llvm"` (the `*-windows-gnullvm` targets).
  pub const LLVM_ABI: Flags = Flags::bit(11);
}

/// `target_vendor`.
pub mod vendor {
  use super::Flags;

  pub const APPLE: Flags = Flags::bit(12);
}

/// `target_arch`, `target_family = "wasm"` and `target_pointer_width`.
pub mod arch {
  use super::Flags;

  pub const X86: Flags = Flags::bit(13);
  pub const X86_64: Flags = Flags::bit(14);
  pub const AARCH64: Flags = Flags::bit(15);
  pub const WASM32: Flags = Flags::bit(16);
  pub const WASM: Flags = Flags::bit(17);
  pub const POINTER_32: Flags = Flags::bit(18);
  pub const POINTER_64: Flags = Flags::bit(19);
}

/// Build profile.
pub mod profile {
  use super::Flags;

  pub const DEBUG_ASSERTIONS: Flags = Flags::bit(20);
}

/// `target_feature` flags for SIMD extensions.
pub mod feature {
  use super::Flags;

  // ─── SSE Family ───
  pub const SSE: Flags = Flags::bit(21);
  pub const SSE2: Flags = Flags::bit(22);
  pub const SSE3: Flags = Flags::bit(23);
  pub const SSSE3: Flags = Flags::bit(24);
  pub const SSE41: Flags = Flags::bit(25);
  pub const SSE42: Flags = Flags::bit(26);

  // ─── AVX Family ───
  pub const AVX: Flags = Flags::bit(27);
  pub const AVX2: Flags = Flags::bit(28);
  pub const FMA: Flags = Flags::bit(29);
  pub const AVX512F: Flags = Flags::bit(30);

  // ─── Other Architectures ───
  pub const NEON: Flags = Flags::bit(31);
  pub const SIMD128: Flags = Flags::bit(32);

  /// Every SIMD feature flag.
  pub const ALL: Flags = Flags(((1u64 << 12) - 1) << 21);
}

const FLAG_NAMES: &[(Flags, &str)] = &[
  (os::WINDOWS, "windows"),
  (os::LINUX, "linux"),
  (os::ANDROID, "android"),
  (os::MACOS, "macos"),
  (os::IOS, "ios"),
  (os::FREEBSD, "freebsd"),
  (os::OPENBSD, "openbsd"),
  (os::UNIX, "unix"),
  (env::GNU, "gnu"),
  (env::MSVC, "msvc"),
  (env::MUSL, "musl"),
  (env::LLVM_ABI, "llvm-abi"),
  (vendor::APPLE, "apple"),
  (arch::X86, "x86"),
  (arch::X86_64, "x86_64"),
  (arch::AARCH64, "aarch64"),
  (arch::WASM32, "wasm32"),
  (arch::WASM, "wasm"),
  (arch::POINTER_32, "ptr32"),
  (arch::POINTER_64, "ptr64"),
  (profile::DEBUG_ASSERTIONS, "debug-assertions"),
  (feature::SSE, "sse"),
  (feature::SSE2, "sse2"),
  (feature::SSE3, "sse3"),
  (feature::SSSE3, "ssse3"),
  (feature::SSE41, "sse4.1"),
  (feature::SSE42, "sse4.2"),
  (feature::AVX, "avx"),
  (feature::AVX2, "avx2"),
  (feature::FMA, "fma"),
  (feature::AVX512F, "avx512f"),
  (feature::NEON, "neon"),
  (feature::SIMD128, "simd128"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Signal Snapshot
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the toolchain committed to for one build.
///
/// `edition` is the year of the newest Rust edition the compiling `rustc`
/// implements, or `0` when the build script could not determine it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Signals {
  flags: Flags,
  edition: u16,
}

impl Signals {
  /// No flags, unknown edition.
  pub const NONE: Self = Self::new(Flags::NONE, 0);

  /// The signals of the current build.
  pub const CURRENT: Self = Self::current();

  #[inline]
  #[must_use]
  pub const fn new(flags: Flags, edition: u16) -> Self {
    Self { flags, edition }
  }

  #[inline]
  #[must_use]
  pub const fn flags(self) -> Flags {
    self.flags
  }

  #[inline]
  #[must_use]
  pub const fn edition(self) -> u16 {
    self.edition
  }

  /// Same signals with `flags` added.
  #[inline]
  #[must_use]
  pub const fn with(self, flags: Flags) -> Self {
    Self::new(self.flags.union(flags), self.edition)
  }

  /// Same signals with `flags` removed.
  #[inline]
  #[must_use]
  pub const fn without(self, flags: Flags) -> Self {
    Self::new(self.flags.difference(flags), self.edition)
  }

  /// Same signals with a different edition year.
  #[inline]
  #[must_use]
  pub const fn with_edition(self, edition: u16) -> Self {
    Self::new(self.flags, edition)
  }

  /// Check if all flags in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Flags) -> bool {
    self.flags.has(required)
  }

  /// Snapshot the current build from `cfg!()`.
  ///
  /// The compiler folds every branch; the result is a constant.
  const fn current() -> Self {
    macro_rules! detect {
      ($flags:ident, $key:ident; $($value:literal => $flag:expr),+ $(,)?) => {
        $(if cfg!($key = $value) { $flags = $flags.union($flag); })+
      };
    }

    let mut flags = Flags::NONE;

    detect!(flags, target_os;
      "windows" => os::WINDOWS,
      "linux" => os::LINUX,
      "android" => os::ANDROID,
      "macos" => os::MACOS,
      "ios" => os::IOS,
      "freebsd" => os::FREEBSD,
      "openbsd" => os::OPENBSD,
    );
    if cfg!(unix) {
      flags = flags.union(os::UNIX);
    }

    detect!(flags, target_env;
      "gnu" => env::GNU,
      "msvc" => env::MSVC,
      "musl" => env::MUSL,
    );
    // Set by the build script from the target triple.
    if cfg!(detect_llvm_abi) {
      flags = flags.union(env::LLVM_ABI);
    }

    detect!(flags, target_vendor; "apple" => vendor::APPLE);

    detect!(flags, target_arch;
      "x86" => arch::X86,
      "x86_64" => arch::X86_64,
      "aarch64" => arch::AARCH64,
      "wasm32" => arch::WASM32,
    );
    detect!(flags, target_family; "wasm" => arch::WASM);
    detect!(flags, target_pointer_width;
      "32" => arch::POINTER_32,
      "64" => arch::POINTER_64,
    );

    if cfg!(debug_assertions) {
      flags = flags.union(profile::DEBUG_ASSERTIONS);
    }

    detect!(flags, target_feature;
      "sse" => feature::SSE,
      "sse2" => feature::SSE2,
      "sse3" => feature::SSE3,
      "ssse3" => feature::SSSE3,
      "sse4.1" => feature::SSE41,
      "sse4.2" => feature::SSE42,
      "avx" => feature::AVX,
      "avx2" => feature::AVX2,
      "fma" => feature::FMA,
      "avx512f" => feature::AVX512F,
      "neon" => feature::NEON,
      "simd128" => feature::SIMD128,
    );

    Self::new(flags, current_edition())
  }
}

/// Edition year emitted by the build script, `0` if it emitted none.
const fn current_edition() -> u16 {
  if cfg!(detect_edition = "2024") {
    2024
  } else if cfg!(detect_edition = "2021") {
    2021
  } else if cfg!(detect_edition = "2018") {
    2018
  } else if cfg!(detect_edition = "2015") {
    2015
  } else {
    0
  }
}

impl fmt::Debug for Signals {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Signals({:?}, edition ", self.flags)?;
    match self.edition {
      0 => write!(f, "unknown)"),
      year => write!(f, "{year})"),
    }
  }
}

impl fmt::Display for Signals {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(self, f)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

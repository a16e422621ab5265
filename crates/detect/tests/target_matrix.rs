//! Target matrix: real target triples and the tags they must report.
//!
//! Each row is the signal set rustc produces for that target, so the rules are
//! exercised far beyond the host this test happens to run on.

use detect::{
  FAMILIES, Family, Signals, compiler,
  compiler::{Clang, Gcc, Mingw, Msvc},
  holds_under, os,
  os::{Android, Ios, Linux, Macos, Unix, Windows},
  profile,
  profile::{Debug, Release},
  signals::{Flags, arch, env, feature, os as target_os, profile as build, vendor},
  simd,
  simd::{Avx, Avx2, Sse, Sse2},
  standard,
  standard::{Edition2018, Edition2021},
};

struct Target {
  triple: &'static str,
  flags: Flags,
  os: Option<&'static str>,
  compiler: Option<&'static str>,
}

const X86_64: Flags = arch::X86_64
  .union(arch::POINTER_64)
  .union(feature::SSE)
  .union(feature::SSE2);
const I686: Flags = arch::X86.union(arch::POINTER_32).union(feature::SSE).union(feature::SSE2);
const AARCH64: Flags = arch::AARCH64.union(arch::POINTER_64).union(feature::NEON);
const LINUX: Flags = target_os::LINUX.union(target_os::UNIX);
const APPLE: Flags = vendor::APPLE.union(target_os::UNIX);

const MATRIX: &[Target] = &[
  Target {
    triple: "x86_64-pc-windows-msvc",
    flags: X86_64.union(target_os::WINDOWS).union(env::MSVC),
    os: Some("windows"),
    compiler: Some("msvc"),
  },
  Target {
    triple: "i686-pc-windows-msvc",
    flags: I686.union(target_os::WINDOWS).union(env::MSVC),
    os: Some("windows"),
    compiler: Some("msvc"),
  },
  Target {
    triple: "x86_64-pc-windows-gnu",
    flags: X86_64.union(target_os::WINDOWS).union(env::GNU),
    os: Some("windows"),
    compiler: Some("gcc"),
  },
  Target {
    triple: "i686-pc-windows-gnu",
    flags: I686.union(target_os::WINDOWS).union(env::GNU),
    os: Some("windows"),
    compiler: Some("mingw"),
  },
  Target {
    triple: "aarch64-pc-windows-gnullvm",
    flags: AARCH64.union(target_os::WINDOWS).union(env::GNU).union(env::LLVM_ABI),
    os: Some("windows"),
    compiler: Some("clang"),
  },
  Target {
    triple: "x86_64-unknown-linux-gnu",
    flags: X86_64.union(LINUX).union(env::GNU),
    os: Some("linux"),
    compiler: Some("gcc"),
  },
  Target {
    triple: "aarch64-unknown-linux-musl",
    flags: AARCH64.union(LINUX).union(env::MUSL),
    os: Some("linux"),
    compiler: Some("gcc"),
  },
  Target {
    triple: "aarch64-linux-android",
    flags: AARCH64.union(target_os::ANDROID).union(target_os::UNIX),
    os: Some("android"),
    compiler: Some("clang"),
  },
  Target {
    triple: "aarch64-apple-darwin",
    flags: AARCH64.union(APPLE).union(target_os::MACOS),
    os: Some("macos"),
    compiler: Some("clang"),
  },
  Target {
    triple: "aarch64-apple-ios",
    flags: AARCH64.union(APPLE).union(target_os::IOS),
    os: Some("ios"),
    compiler: Some("clang"),
  },
  Target {
    triple: "aarch64-apple-tvos",
    flags: AARCH64.union(APPLE),
    os: Some("unix"),
    compiler: Some("clang"),
  },
  Target {
    triple: "x86_64-unknown-freebsd",
    flags: X86_64.union(target_os::FREEBSD).union(target_os::UNIX),
    os: Some("unix"),
    compiler: Some("clang"),
  },
  Target {
    triple: "x86_64-unknown-openbsd",
    flags: X86_64.union(target_os::OPENBSD).union(target_os::UNIX),
    os: Some("unix"),
    compiler: Some("clang"),
  },
  Target {
    triple: "x86_64-unknown-netbsd",
    flags: X86_64.union(target_os::UNIX),
    os: Some("unix"),
    compiler: None,
  },
  Target {
    triple: "wasm32-unknown-unknown",
    flags: arch::WASM32.union(arch::WASM).union(arch::POINTER_32),
    os: None,
    compiler: Some("clang"),
  },
  Target {
    triple: "x86_64-unknown-hermit",
    flags: X86_64,
    os: None,
    compiler: None,
  },
  Target {
    triple: "x86_64-unknown-uefi",
    flags: X86_64,
    os: None,
    compiler: None,
  },
];

fn active_names(family: &Family, signals: Signals) -> Vec<&'static str> {
  family.active_under(signals).map(|entry| entry.name).collect()
}

fn expected(name: Option<&'static str>) -> Vec<&'static str> {
  name.into_iter().collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Exclusivity
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn each_target_reports_its_os() {
  for target in MATRIX {
    let signals = Signals::new(target.flags, 2021);
    assert_eq!(
      active_names(&os::FAMILY, signals),
      expected(target.os),
      "{}: wrong OS tags",
      target.triple
    );
  }
}

#[test]
fn each_target_reports_its_compiler() {
  for target in MATRIX {
    let signals = Signals::new(target.flags, 2021);
    assert_eq!(
      active_names(&compiler::FAMILY, signals),
      expected(target.compiler),
      "{}: wrong compiler tags",
      target.triple
    );
  }
}

#[test]
fn exclusive_families_hold_on_every_target_and_profile() {
  for target in MATRIX {
    for edition in [0, 2015, 2018, 2021, 2024] {
      for debug in [false, true] {
        let mut signals = Signals::new(target.flags, edition);
        if debug {
          signals = signals.with(build::DEBUG_ASSERTIONS);
        }
        for family in FAMILIES {
          assert!(
            family.is_consistent_under(signals),
            "{}: {} reports {:?}",
            target.triple,
            family.name,
            active_names(&family, signals)
          );
        }
        assert_eq!(profile::FAMILY.active_count_under(signals), 1);
        let standards = standard::FAMILY.active_count_under(signals);
        assert_eq!(standards, usize::from(edition != 0), "{}: edition {edition}", target.triple);
      }
    }
  }
}

#[test]
fn rows_agree_with_generic_query() {
  for target in MATRIX {
    let s = Signals::new(target.flags, 2021);
    let by_query = [
      ("windows", holds_under::<Windows>(s)),
      ("linux", holds_under::<Linux>(s)),
      ("macos", holds_under::<Macos>(s)),
      ("ios", holds_under::<Ios>(s)),
      ("android", holds_under::<Android>(s)),
      ("unix", holds_under::<Unix>(s)),
    ];
    for (name, value) in by_query {
      assert_eq!(value, target.os == Some(name), "{}: {name}", target.triple);
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn scenario_windows_gcc_edition_2021_debug() {
  let s = Signals::new(
    X86_64.union(target_os::WINDOWS).union(env::GNU).union(build::DEBUG_ASSERTIONS),
    2021,
  );

  assert!(holds_under::<Windows>(s));
  assert!(!holds_under::<Linux>(s));
  assert!(holds_under::<Gcc>(s));
  assert!(!holds_under::<Clang>(s));
  assert!(!holds_under::<Msvc>(s));
  assert!(!holds_under::<Mingw>(s));
  assert!(holds_under::<Edition2021>(s));
  assert!(!holds_under::<Edition2018>(s));
  assert!(holds_under::<Debug>(s));
  assert!(!holds_under::<Release>(s));
}

#[test]
fn scenario_x86_64_without_avx() {
  // Only the architecture: no sse/sse2 feature flags at all.
  let s = Signals::new(arch::X86_64.union(LINUX).union(env::GNU), 2021);

  assert!(holds_under::<Sse2>(s));
  assert!(!holds_under::<Avx>(s));
  assert!(!holds_under::<Avx2>(s));
  assert_eq!(
    simd::FAMILY.active_under(s).map(|entry| entry.name).collect::<Vec<_>>(),
    ["sse2"]
  );
}

#[test]
fn scenario_avx2_build_keeps_sse_levels() {
  let s = Signals::new(X86_64.union(feature::AVX).union(feature::AVX2), 2024);

  assert!(holds_under::<Sse>(s));
  assert!(holds_under::<Sse2>(s));
  assert!(holds_under::<Avx>(s));
  assert!(holds_under::<Avx2>(s));
}

#[test]
fn scenario_exotic_os_reports_no_os() {
  let s = Signals::new(arch::X86_64.union(arch::POINTER_64), 2024);
  assert_eq!(os::FAMILY.active_count_under(s), 0);
  assert_eq!(compiler::FAMILY.active_count_under(s), 0);
  // The other families still answer.
  assert_eq!(profile::FAMILY.active_count_under(s), 1);
  assert_eq!(standard::FAMILY.active_count_under(s), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Host
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn host_build_is_consistent() {
  for family in FAMILIES {
    assert!(family.is_consistent_under(Signals::CURRENT), "{}", family.name);
  }
  assert_eq!(profile::FAMILY.active().count(), 1);
  assert_eq!(standard::FAMILY.active().count(), 1);
}

#[test]
#[cfg(all(target_arch = "x86_64", target_os = "linux", target_env = "gnu"))]
fn host_linux_gnu() {
  assert!(detect::IS_LINUX);
  assert!(detect::IS_GCC);
  assert!(detect::IS_SSE2);
  assert!(!detect::IS_WINDOWS);
  assert!(!detect::IS_UNIX);
}

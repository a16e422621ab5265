//! Emits the toolchain signals rustc does not expose as `cfg`s.
//!
//! - `detect_edition = "YYYY"`: newest edition the compiling rustc implements.
//! - `detect_llvm_abi`: the target uses the LLVM MinGW ABI (`*-gnullvm`).
//!
//! A failed probe never fails the build. It is reported with
//! `cargo:warning` and the corresponding cfg is simply not emitted.

use std::{env, ffi::OsString, process::Command};

#[path = "build/rustc.rs"]
mod rustc;

use rustc::{ProbeError, RustcVersion};

fn main() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=build/rustc.rs");
  println!("cargo:rerun-if-env-changed=RUSTC");
  println!("cargo:rustc-check-cfg=cfg(detect_edition, values(\"2015\", \"2018\", \"2021\", \"2024\"))");
  println!("cargo:rustc-check-cfg=cfg(detect_llvm_abi)");

  match probe_rustc() {
    Ok(version) => println!("cargo:rustc-cfg=detect_edition=\"{}\"", version.newest_edition()),
    Err(err) => println!("cargo:warning=detect: {err}; edition tags will all be false"),
  }

  if is_llvm_abi() {
    println!("cargo:rustc-cfg=detect_llvm_abi");
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// rustc Probe
// ─────────────────────────────────────────────────────────────────────────────

fn probe_rustc() -> Result<RustcVersion, ProbeError> {
  let rustc = env::var_os("RUSTC").unwrap_or_else(|| OsString::from("rustc"));
  let output = Command::new(rustc).arg("--version").output().map_err(ProbeError::Spawn)?;
  if !output.status.success() {
    return Err(ProbeError::Exit(output.status.code()));
  }
  let stdout = String::from_utf8(output.stdout).map_err(|_| ProbeError::Utf8)?;
  RustcVersion::parse(&stdout)
}

// ─────────────────────────────────────────────────────────────────────────────
// Target ABI
// ─────────────────────────────────────────────────────────────────────────────

fn is_llvm_abi() -> bool {
  let abi = env::var("CARGO_CFG_TARGET_ABI").unwrap_or_default();
  let target = env::var("TARGET").unwrap_or_default();
  abi == "llvm" || target.ends_with("-gnullvm")
}

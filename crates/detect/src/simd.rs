//! SIMD instruction-set extensions.
//!
//! Unlike the other families these tags are cumulative: an AVX2 build also
//! reports the SSE levels it enabled. Each tag tests only its own
//! `target_feature` (plus the architectural baseline for [`Sse2`] on x86_64);
//! nothing is inferred from a higher level, because toolchains do not always
//! set every implied feature.
//!
//! No rule forbids a flag, so enabling more features never turns a tag off.
//!
//! Only features rustc was told about at compile time are reported. This
//! module never executes CPUID.

use crate::{
  rule::Clause,
  signals::{
    arch::{X86, X86_64},
    feature::{AVX, AVX2, AVX512F, FMA, NEON, SIMD128, SSE, SSE2, SSE3, SSE41, SSE42, SSSE3},
  },
  tag::catalogue,
};

catalogue! {
  /// SIMD category.
  category Simd("simd", exclusive = false);

  /// Does SIMD tag `T` hold for this build?
  query is_simd;

  /// 32-bit x86 with SSE code generation.
  X86Sse("x86-sse") => IS_X86_SSE [Clause::when(X86.union(SSE))];
  /// 32-bit x86 with SSE2 code generation.
  X86Sse2("x86-sse2") => IS_X86_SSE2 [Clause::when(X86.union(SSE2))];
  Sse("sse") => IS_SSE [Clause::when(SSE)];
  Sse2("sse2") => IS_SSE2 [Clause::when(SSE2), Clause::when(X86_64)];
  Sse3("sse3") => IS_SSE3 [Clause::when(SSE3)];
  Ssse3("ssse3") => IS_SSSE3 [Clause::when(SSSE3)];
  Sse41("sse4.1") => IS_SSE41 [Clause::when(SSE41)];
  Sse42("sse4.2") => IS_SSE42 [Clause::when(SSE42)];
  Avx("avx") => IS_AVX [Clause::when(AVX)];
  Avx2("avx2") => IS_AVX2 [Clause::when(AVX2)];
  Fma("fma") => IS_FMA [Clause::when(FMA)];
  Avx512f("avx512f") => IS_AVX512F [Clause::when(AVX512F)];
  /// AArch64 / ARM Advanced SIMD.
  Neon("neon") => IS_NEON [Clause::when(NEON)];
  /// WebAssembly 128-bit SIMD.
  Simd128("simd128") => IS_SIMD128 [Clause::when(SIMD128)];
}

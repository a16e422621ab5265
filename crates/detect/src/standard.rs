//! Language standard revision.
//!
//! Rust has no per-build standard switch; the closest analogue is the newest
//! edition the compiling `rustc` implements. The build script derives it from
//! `rustc --version`:
//!
//! | rustc     | edition |
//! |-----------|---------|
//! | >= 1.85   | 2024    |
//! | >= 1.56   | 2021    |
//! | >= 1.31   | 2018    |
//! | older     | 2015    |
//!
//! If the probe fails every tag here is false.
//!
//! This is not the edition the calling crate is compiled under. A crate with
//! `edition = "2021"` built by rustc 1.85 or newer sees [`IS_EDITION_2024`];
//! read these tags as "the toolchain can compile this edition".

use crate::{rule::Clause, tag::catalogue};

catalogue! {
  /// Language standard category.
  category Standard("standard", exclusive = true);

  /// Does standard tag `T` hold for this build?
  query is_std;

  Edition2015("2015") => IS_EDITION_2015 [Clause::edition(2015)];
  Edition2018("2018") => IS_EDITION_2018 [Clause::edition(2018)];
  Edition2021("2021") => IS_EDITION_2021 [Clause::edition(2021)];
  Edition2024("2024") => IS_EDITION_2024 [Clause::edition(2024)];
}

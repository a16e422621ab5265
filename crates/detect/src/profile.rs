//! Build mode.
//!
//! [`Debug`] follows `debug_assertions`; [`Release`] is its complement, so
//! exactly one of them holds. A release profile built with
//! `debug-assertions = true` reports [`Debug`].

use crate::{rule::Clause, signals::profile::DEBUG_ASSERTIONS, tag::catalogue};

catalogue! {
  /// Build mode category.
  category BuildMode("build", exclusive = true);

  /// Does build mode tag `T` hold for this build?
  query is_build;

  Debug("debug") => IS_DEBUG [Clause::when(DEBUG_ASSERTIONS)];
  Release("release") => IS_RELEASE [Clause::ALWAYS.unless(DEBUG_ASSERTIONS)];
}

//! Per-tag override rules.
//!
//! A [`Rule`] decides whether a tag holds for a given [`Signals`] snapshot. It
//! is a disjunction of [`Clause`]s; each clause is a conjunction of required
//! flags, forbidden flags, and an optional exact edition year.
//!
//! A rule with no clauses never holds. That is [`Rule::NEVER`], the default
//! every tag starts from.

use crate::signals::{Flags, Signals};

/// One conjunctive condition over signals.
///
/// ```
/// use detect::rule::Clause;
/// use detect::signals::{os, Signals};
///
/// // "unix, but not linux"
/// let clause = Clause::when(os::UNIX).unless(os::LINUX);
/// assert!(clause.holds(Signals::NONE.with(os::UNIX | os::FREEBSD)));
/// assert!(!clause.holds(Signals::NONE.with(os::UNIX | os::LINUX)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Clause {
  all: Flags,
  none: Flags,
  edition: u16,
}

impl Clause {
  /// Holds for every snapshot.
  pub const ALWAYS: Self = Self {
    all: Flags::NONE,
    none: Flags::NONE,
    edition: 0,
  };

  /// Holds when every flag in `flags` is present.
  #[inline]
  #[must_use]
  pub const fn when(flags: Flags) -> Self {
    Self::ALWAYS.and(flags)
  }

  /// Holds when the edition year is exactly `year`.
  ///
  /// `year` must be non-zero; `0` means "any edition".
  #[inline]
  #[must_use]
  pub const fn edition(year: u16) -> Self {
    Self { edition: year, ..Self::ALWAYS }
  }

  /// Additionally require every flag in `flags`.
  #[inline]
  #[must_use]
  pub const fn and(self, flags: Flags) -> Self {
    Self {
      all: self.all.union(flags),
      ..self
    }
  }

  /// Additionally require that no flag in `flags` is present.
  #[inline]
  #[must_use]
  pub const fn unless(self, flags: Flags) -> Self {
    Self {
      none: self.none.union(flags),
      ..self
    }
  }

  #[inline]
  #[must_use]
  pub const fn holds(self, signals: Signals) -> bool {
    signals.has(self.all)
      && !signals.flags().intersects(self.none)
      && (self.edition == 0 || self.edition == signals.edition())
  }

  /// Flags this clause requires.
  #[inline]
  #[must_use]
  pub const fn required(self) -> Flags {
    self.all
  }

  /// Flags this clause forbids.
  #[inline]
  #[must_use]
  pub const fn forbidden(self) -> Flags {
    self.none
  }
}

/// Disjunction of clauses: holds when any clause holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
  clauses: &'static [Clause],
}

impl Rule {
  /// Never holds. The default for every tag.
  pub const NEVER: Self = Self { clauses: &[] };

  #[inline]
  #[must_use]
  pub const fn any_of(clauses: &'static [Clause]) -> Self {
    Self { clauses }
  }

  #[inline]
  #[must_use]
  pub const fn clauses(self) -> &'static [Clause] {
    self.clauses
  }

  /// Evaluate against `signals`.
  #[must_use]
  pub const fn holds(self, signals: Signals) -> bool {
    let mut i = 0;
    while i < self.clauses.len() {
      if self.clauses[i].holds(signals) {
        return true;
      }
      i += 1;
    }
    false
  }

  /// True if no clause forbids anything.
  ///
  /// Such a rule can only flip from false to true as flags are added.
  #[must_use]
  pub const fn is_monotonic(self) -> bool {
    let mut i = 0;
    while i < self.clauses.len() {
      if !self.clauses[i].none.is_empty() {
        return false;
      }
      i += 1;
    }
    true
  }
}

impl Default for Rule {
  #[inline]
  fn default() -> Self {
    Self::NEVER
  }
}

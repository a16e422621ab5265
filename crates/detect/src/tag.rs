//! Categories, capability tags, and the generic query.
//!
//! A tag is an uninhabited type used purely as a compile-time key. Its
//! [`Capability`] impl names its [`Category`] and may override
//! [`RULE`](Capability::RULE); without an override the tag is simply false.
//!
//! ```
//! use detect::os::Os;
//! use detect::{is, Capability};
//!
//! // A tag this crate does not know about.
//! pub enum Haiku {}
//!
//! impl Capability for Haiku {
//!   type Category = Os;
//!   const NAME: &'static str = "haiku";
//! }
//!
//! const IS_HAIKU: bool = is::<Os, Haiku>();
//! assert!(!IS_HAIKU);
//! ```
//!
//! Tags are type-level names, never values:
//!
//! ```compile_fail
//! let tag = detect::os::Windows;
//! ```

use crate::{rule::Rule, signals::Signals};

// ─────────────────────────────────────────────────────────────────────────────
// Traits
// ─────────────────────────────────────────────────────────────────────────────

/// A closed family of related compile-time facts.
pub trait Category {
  const NAME: &'static str;

  /// At most one tag of an exclusive category holds for a recognized target.
  const EXCLUSIVE: bool;
}

/// A single named value within a [`Category`].
pub trait Capability {
  type Category: Category;

  const NAME: &'static str;

  /// When this tag holds. Defaults to never.
  const RULE: Rule = Rule::NEVER;
}

// ─────────────────────────────────────────────────────────────────────────────
// Queries
// ─────────────────────────────────────────────────────────────────────────────

/// Does tag `T` of category `C` hold for this build?
///
/// Usable in `const` items; the result is a compile-time literal.
///
/// ```
/// use detect::{is, os};
///
/// const WINDOWS: bool = is::<os::Os, os::Windows>();
/// assert_eq!(WINDOWS, cfg!(windows));
/// ```
#[inline(always)]
#[must_use]
pub const fn is<C: Category, T: Capability<Category = C>>() -> bool {
  holds_under::<T>(Signals::CURRENT)
}

/// Does tag `T` hold under an arbitrary signal snapshot?
///
/// This is the same evaluation [`is`] performs, against signals other than the
/// current build's.
#[inline(always)]
#[must_use]
pub const fn holds_under<T: Capability>(signals: Signals) -> bool {
  T::RULE.holds(signals)
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue Records
// ─────────────────────────────────────────────────────────────────────────────

/// One tag of the catalogue, with its rule and its value for this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
  pub name: &'static str,
  pub active: bool,
  #[cfg_attr(feature = "serde", serde(skip))]
  pub rule: Rule,
}

impl Entry {
  #[inline]
  #[must_use]
  pub const fn of<T: Capability>() -> Self {
    Self {
      name: T::NAME,
      active: holds_under::<T>(Signals::CURRENT),
      rule: T::RULE,
    }
  }
}

/// One category with all of its tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Family {
  pub name: &'static str,
  pub exclusive: bool,
  pub tags: &'static [Entry],
}

impl Family {
  #[inline]
  #[must_use]
  pub const fn of<C: Category>(tags: &'static [Entry]) -> Self {
    Self {
      name: C::NAME,
      exclusive: C::EXCLUSIVE,
      tags,
    }
  }

  /// Tags that hold for this build.
  pub fn active(self) -> impl Iterator<Item = &'static Entry> {
    self.tags.iter().filter(|entry| entry.active)
  }

  /// Tags that hold under `signals`.
  pub fn active_under(self, signals: Signals) -> impl Iterator<Item = &'static Entry> {
    self.tags.iter().filter(move |entry| entry.rule.holds(signals))
  }

  #[must_use]
  pub const fn active_count_under(&self, signals: Signals) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < self.tags.len() {
      if self.tags[i].rule.holds(signals) {
        count += 1;
      }
      i += 1;
    }
    count
  }

  /// An exclusive family must not report more than one tag.
  #[must_use]
  pub const fn is_consistent_under(&self, signals: Signals) -> bool {
    !self.exclusive || self.active_count_under(signals) <= 1
  }

  #[must_use]
  pub fn find(&self, name: &str) -> Option<&'static Entry> {
    self.tags.iter().find(|entry| entry.name == name)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue Declaration
// ─────────────────────────────────────────────────────────────────────────────

/// Declare a capability family.
///
/// This macro creates:
/// - The uninhabited category type and its `Category` impl
/// - One uninhabited type per tag with its `Capability` impl and rule
/// - One `IS_*` constant per tag, evaluated through [`is`]
/// - `TAGS`, `FAMILY`, and the family query function
///
/// Every tag goes through here, so none can be declared without its rule,
/// constant, and catalogue row.
macro_rules! catalogue {
  (
    $(#[$cat_meta:meta])*
    category $cat:ident($cat_name:literal, exclusive = $exclusive:literal);

    $(#[$query_meta:meta])*
    query $query:ident;

    $(
      $(#[$meta:meta])*
      $tag:ident($name:literal) => $flag:ident [$($clause:expr),* $(,)?];
    )+
  ) => {
    $(#[$cat_meta])*
    pub enum $cat {}

    impl $crate::tag::Category for $cat {
      const NAME: &'static str = $cat_name;
      const EXCLUSIVE: bool = $exclusive;
    }

    $(
      $(#[$meta])*
      pub enum $tag {}

      impl $crate::tag::Capability for $tag {
        type Category = $cat;
        const NAME: &'static str = $name;
        const RULE: $crate::rule::Rule = {
          const CLAUSES: &[$crate::rule::Clause] = &[$($clause),*];
          $crate::rule::Rule::any_of(CLAUSES)
        };
      }

      #[doc = concat!("`true` when [`", stringify!($tag), "`] holds for this build.")]
      pub const $flag: bool = $crate::tag::is::<$cat, $tag>();
    )+

    /// Every tag of this family, in declaration order.
    pub const TAGS: &[$crate::tag::Entry] = &[$($crate::tag::Entry::of::<$tag>()),+];

    pub const FAMILY: $crate::tag::Family = $crate::tag::Family::of::<$cat>(TAGS);

    $(#[$query_meta])*
    #[inline(always)]
    #[must_use]
    pub const fn $query<T: $crate::tag::Capability<Category = $cat>>() -> bool {
      $crate::tag::is::<$cat, T>()
    }
  };
}

pub(crate) use catalogue;

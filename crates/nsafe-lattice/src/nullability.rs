//! The nullability classification lattice.

use std::fmt;

/// Nullability of a value, as established by the (external) dataflow engine.
///
/// `Null` is the lattice top and `StrictNonnull` the bottom. The non-null
/// variants record *how* non-nullness was established, from least trusted
/// (a third-party signature file someone else maintains) to most trusted
/// (proven under the strict discipline):
///
/// ```text
/// Null
///   Nullable
///     ThirdPartyNonnull
///       UncheckedNonnull
///         LocallyTrustedNonnull
///           LocallyCheckedNonnull
///             StrictNonnull
/// ```
///
/// Checking modes draw their trust threshold at different points of the
/// non-null band; see [`crate::Mode::is_considered_nonnull`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Nullability {
    /// The literal null value.
    Null,
    /// May be null.
    Nullable,
    /// Declared non-null by a third-party signature file.
    ThirdPartyNonnull,
    /// Declared non-null in first-party code that has not been checked yet.
    UncheckedNonnull,
    /// Declared non-null in code the current mode explicitly trusts.
    LocallyTrustedNonnull,
    /// Established non-null by code checked under at least the default
    /// discipline.
    LocallyCheckedNonnull,
    /// Established non-null under the strict discipline.
    StrictNonnull,
}

impl Nullability {
    /// Position in the lattice, counted from the bottom. Internal to the
    /// subtype relation; callers compare via [`Nullability::is_subtype`].
    fn strictness(self) -> u8 {
        match self {
            Nullability::StrictNonnull => 0,
            Nullability::LocallyCheckedNonnull => 1,
            Nullability::LocallyTrustedNonnull => 2,
            Nullability::UncheckedNonnull => 3,
            Nullability::ThirdPartyNonnull => 4,
            Nullability::Nullable => 5,
            Nullability::Null => 6,
        }
    }

    /// Whether `subtype` can flow into a slot requiring `supertype` on
    /// structural grounds alone, with no mode leniency applied.
    pub fn is_subtype(supertype: Nullability, subtype: Nullability) -> bool {
        subtype.strictness() <= supertype.strictness()
    }

    /// Whether this classification is one of the non-null provenances.
    pub fn is_nonnullish(self) -> bool {
        !matches!(self, Nullability::Null | Nullability::Nullable)
    }
}

impl fmt::Display for Nullability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Nullability::Null => "null",
            Nullability::Nullable => "nullable",
            Nullability::ThirdPartyNonnull => "third-party non-null",
            Nullability::UncheckedNonnull => "unchecked non-null",
            Nullability::LocallyTrustedNonnull => "locally trusted non-null",
            Nullability::LocallyCheckedNonnull => "locally checked non-null",
            Nullability::StrictNonnull => "strict non-null",
        };
        f.write_str(text)
    }
}

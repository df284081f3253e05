//! Checking modes.

use nsafe_common::Severity;

use crate::Nullability;

/// Strictness level a compilation unit is checked under.
///
/// Modes are compared by equality only; the rule engine never orders them.
/// Each mode fixes two things:
///
/// - the severity its violations are reported at, and
/// - the trust threshold inside the non-null band of the lattice: which
///   provenances the mode is willing to treat as really non-null.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Baseline discipline for not-yet-migrated code. Reports at warning
    /// severity and trusts any first-party non-null declaration.
    Default,
    /// Trusts first-party declarations only when they come from explicitly
    /// trusted code.
    Local,
    /// Trusts only non-nullness established by checked code.
    Strict,
}

impl Mode {
    pub fn severity(self) -> Severity {
        match self {
            Mode::Default => Severity::Warning,
            Mode::Local | Mode::Strict => Severity::Error,
        }
    }

    /// The mode-parameterized "considered non-null" predicate.
    ///
    /// This is a deliberate leniency seam: a value whose non-nullness was
    /// established below the structural requirement can still pass the
    /// assignment rule when the active mode trusts its provenance.
    /// `Null` and `Nullable` never pass, in any mode.
    pub fn is_considered_nonnull(self, value: Nullability) -> bool {
        let threshold = match self {
            Mode::Default => Nullability::UncheckedNonnull,
            Mode::Local => Nullability::LocallyTrustedNonnull,
            Mode::Strict => Nullability::LocallyCheckedNonnull,
        };
        value.is_nonnullish() && Nullability::is_subtype(threshold, value)
    }
}

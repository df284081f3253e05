//! The assignment legality rule.
//!
//! `check` is the single decision point for "may this value flow into that
//! slot": ordinary lattice subtyping, plus two mode-dependent leniency
//! escape hatches that trade soundness for incremental adoptability.

use nsafe_lattice::{Mode, Nullability};
use tracing::trace;

/// Explicit configuration for the assignment rule.
///
/// Originally ambient process configuration; passed explicitly so the rule
/// stays a pure function of its arguments.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Under the `Default` mode, accept any source when the target is the
    /// third-party-declared non-null variant. Third-party non-null
    /// declarations may be approximate, and code checked under the loose
    /// mode should not drown in noise when calling such APIs.
    pub optimistic_third_party: bool,
}

/// An illegal assignment under the active mode.
///
/// A `Violation` is a normal result value, never an internal error; it
/// carries the three check inputs unchanged and exists solely to drive
/// diagnostic composition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub mode: Mode,
    pub target: Nullability,
    pub source: Nullability,
}

/// Decide whether a value of nullability `source` may be assigned to a slot
/// requiring `target` under `mode`.
///
/// The rule is a pure disjunction with no priority among its disjuncts:
/// 1. `source` is a lattice subtype of `target`;
/// 2. the optimistic third-party leniency applies (`Default` mode, flag
///    enabled, target is `ThirdPartyNonnull`);
/// 3. `mode` considers `source` non-null.
///
/// Total and deterministic; no side effects beyond a trace event.
pub fn check(
    mode: Mode,
    target: Nullability,
    source: Nullability,
    options: CheckOptions,
) -> Result<(), Violation> {
    let structurally_sound = Nullability::is_subtype(target, source);
    let optimistic_third_party = mode == Mode::Default
        && options.optimistic_third_party
        && target == Nullability::ThirdPartyNonnull;
    let mode_leniency = mode.is_considered_nonnull(source);

    if structurally_sound || optimistic_third_party || mode_leniency {
        Ok(())
    } else {
        trace!(?mode, ?target, ?source, "assignment rejected");
        Err(Violation {
            mode,
            target,
            source,
        })
    }
}

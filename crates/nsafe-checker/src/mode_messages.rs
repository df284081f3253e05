//! Mode-specific diagnostic phrasing.

use nsafe_common::markup::monospaced;
use nsafe_lattice::Mode;

use crate::assignment_checker::Violation;
use crate::context::AssignmentContext;

/// Supplies a complete replacement message for violations under a
/// non-default mode. A `Some` return is used verbatim; generic composition
/// (evidence attachment, third-party lookup) is skipped entirely so the two
/// phrasings never mix.
pub trait ModeRenderer: Sync {
    fn replacement_message(
        &self,
        violation: &Violation,
        context: &AssignmentContext,
    ) -> Option<String>;
}

/// Stock phrasing for the stricter modes. Under stricter checking the
/// interesting fact is usually not "this might be null" but "this value's
/// non-nullness comes from code the mode does not trust", so the message
/// leads with trust rather than nullability. `Default` mode always falls
/// back to generic composition.
pub struct StrictModeMessages;

impl ModeRenderer for StrictModeMessages {
    fn replacement_message(
        &self,
        violation: &Violation,
        context: &AssignmentContext,
    ) -> Option<String> {
        let mode_name = match violation.mode {
            Mode::Default => return None,
            Mode::Local => "local",
            Mode::Strict => "strict",
        };
        let subject = match context {
            AssignmentContext::ParameterPassing { callee, param, .. } => {
                format!("parameter #{} of {}", param.position, monospaced(callee))
            }
            AssignmentContext::FieldAssignment { field } => monospaced(field),
            AssignmentContext::ReturnStatement { callee } => {
                format!("the return value of {}", monospaced(callee))
            }
        };
        Some(format!(
            "{subject} is declared non-nullable, but the assigned value is not trusted to be non-null under {mode_name} checking."
        ))
    }
}

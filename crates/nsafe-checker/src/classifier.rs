//! Violation classification (`issue_kind` + `severity`).
//!
//! Pure structural mappings, split out from message composition so the
//! report pipeline can classify a violation without building its full text.

use nsafe_common::{IssueKind, Severity};

use crate::assignment_checker::Violation;
use crate::context::AssignmentContext;

pub fn issue_kind(context: &AssignmentContext) -> IssueKind {
    match context {
        AssignmentContext::ParameterPassing { .. } => IssueKind::ParameterNotNullable,
        AssignmentContext::FieldAssignment { .. } => IssueKind::FieldNotNullable,
        AssignmentContext::ReturnStatement { .. } => IssueKind::ReturnNotNullable,
    }
}

/// Severity is entirely the mode's decision.
pub fn severity(violation: &Violation) -> Severity {
    violation.mode.severity()
}

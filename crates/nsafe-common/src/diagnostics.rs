use serde::Serialize;

use crate::position::SourceLocation;

/// Severity a violation is reported at. The checking mode decides which
/// severity applies; this crate only carries the value through to the report.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// Stable classification of a nullability violation, keyed by the syntactic
/// site of the offending assignment. The string forms are part of the report
/// format consumed by downstream tooling and must not change casually.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    ParameterNotNullable,
    FieldNotNullable,
    ReturnNotNullable,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::ParameterNotNullable => "PARAMETER_NOT_NULLABLE",
            IssueKind::FieldNotNullable => "FIELD_NOT_NULLABLE",
            IssueKind::ReturnNotNullable => "RETURN_NOT_NULLABLE",
        }
    }
}

/// A fully rendered nullability diagnostic, ready for the report pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message_text: String,
    pub location: SourceLocation,
}

impl Diagnostic {
    pub fn new(
        kind: IssueKind,
        severity: Severity,
        message_text: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            severity,
            message_text: message_text.into(),
            location,
        }
    }
}

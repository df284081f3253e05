//! Internal contract violations.

use thiserror::Error;

/// A diagnostic rendering path was invoked with inputs that are
/// structurally impossible for that context (for example, a non-null
/// source reaching the "declared non-nullable but assigned X" renderer).
///
/// This signals a bug in the caller or the lattice, not a defect in the
/// analyzed code. The driver must terminate the current analysis unit on
/// it; it is never coerced into a plausible-looking user message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("internal contract violation: {message}")]
pub struct ContractViolation {
    message: String,
}

impl ContractViolation {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

//! Evidence for why a value has its nullability.

use nsafe_common::markup::monospaced;

/// A renderable trail explaining why the source value of a violation has
/// the nullability it has. Implemented by the dataflow engine; this crate
/// ships [`OriginTrail`] for the common trails and for tests.
pub trait Origin: Sync {
    /// Human-readable description of the trail, or `None` when there is
    /// nothing useful to say.
    fn describe(&self) -> Option<String>;

    /// Whether the literal `expression` text already explains its own
    /// nullability, making an attached trail redundant. An expression that
    /// *is* the nullable call does not need "result of the nullable call"
    /// restated after it.
    fn is_self_explanatory(&self, expression: &str) -> bool;
}

/// Stock origin trails produced by the dataflow engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginTrail {
    /// The value is the literal `null`.
    NullLiteral,
    /// The value is the result of a nullable-returning call.
    NullableCall { callee: String },
    /// The value was read from a nullable field.
    NullableFieldRead { field: String },
    /// The engine could not reconstruct a trail.
    Unknown,
}

impl Origin for OriginTrail {
    fn describe(&self) -> Option<String> {
        match self {
            OriginTrail::NullLiteral | OriginTrail::Unknown => None,
            OriginTrail::NullableCall { callee } => Some(format!(
                "result of the nullable call {}",
                monospaced(&format!("{callee}()"))
            )),
            OriginTrail::NullableFieldRead { field } => {
                Some(format!("read of the nullable field {}", monospaced(field)))
            }
        }
    }

    fn is_self_explanatory(&self, expression: &str) -> bool {
        match self {
            OriginTrail::NullLiteral => expression == "null",
            OriginTrail::NullableCall { callee } => expression == format!("{callee}()"),
            OriginTrail::NullableFieldRead { field } => expression == *field,
            OriginTrail::Unknown => false,
        }
    }
}

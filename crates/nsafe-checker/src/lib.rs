//! Assignment-legality rule engine for the nsafe nullability checker.
//!
//! Given a value's nullability (computed elsewhere by the dataflow engine)
//! and the nullability its destination requires, this crate decides whether
//! the assignment is legal under the active checking mode and, when it is
//! not, composes the user-facing diagnostic.
//!
//! This module is organized into several submodules:
//! - `assignment_checker` - the pure legality rule (`check`)
//! - `classifier` - violation → issue kind / severity mapping
//! - `composer` - diagnostic message composition
//! - `context` - the syntactic site of a checked assignment
//! - `origin` - evidence for why a value has its nullability
//! - `third_party` - third-party signature registry
//! - `mode_messages` - mode-specific replacement phrasing
//! - `error` - internal contract violations

pub mod assignment_checker;
pub mod classifier;
pub mod composer;
pub mod context;
pub mod error;
pub mod mode_messages;
pub mod origin;
pub mod third_party;

pub use assignment_checker::{CheckOptions, Violation, check};
pub use composer::{DiagnosticComposer, SYNTHESIZED_NAME_MARKER};
pub use context::{AnnotationProvenance, AssignmentContext, ParamInfo};
pub use error::ContractViolation;
pub use mode_messages::{ModeRenderer, StrictModeMessages};
pub use origin::{Origin, OriginTrail};
pub use third_party::{SignatureLocation, ThirdPartyIndex, ThirdPartyRegistry};

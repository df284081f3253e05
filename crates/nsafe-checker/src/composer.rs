//! Diagnostic message composition.
//!
//! Turns a [`Violation`] plus its [`AssignmentContext`] into the final
//! user-facing diagnostic. Composition is a two-step pipeline:
//!
//! 1. **Decide**: mode-specific phrasing wins outright; otherwise decide
//!    whether origin evidence is worth attaching.
//! 2. **Compose**: render the per-context message, consulting the
//!    third-party signature registry for remediation hints on parameter
//!    passes into unmodeled callees.
//!
//! Rendering branches assert the source-nullability invariant: a
//! field/return/argument description only exists for `Null` and `Nullable`
//! sources. Anything else is a [`ContractViolation`], never a user message.

use nsafe_common::markup::monospaced;
use nsafe_common::{Diagnostic, SourceLocation};
use nsafe_lattice::{Mode, Nullability};
use tracing::debug;

use crate::assignment_checker::Violation;
use crate::classifier;
use crate::context::{AnnotationProvenance, AssignmentContext, ParamInfo};
use crate::error::ContractViolation;
use crate::mode_messages::ModeRenderer;
use crate::origin::Origin;
use crate::third_party::ThirdPartyRegistry;

/// Substring a frontend puts into a parameter name it had to synthesize
/// because the source-level name was lost (e.g. `_arg_2`). Such names are
/// meaningless to users and are omitted from messages.
pub const SYNTHESIZED_NAME_MARKER: &str = "_arg_";

/// Composes diagnostics over process-lifetime, immutable collaborators.
pub struct DiagnosticComposer<'a> {
    mode_renderer: &'a dyn ModeRenderer,
    registry: &'a dyn ThirdPartyRegistry,
}

impl<'a> DiagnosticComposer<'a> {
    pub fn new(mode_renderer: &'a dyn ModeRenderer, registry: &'a dyn ThirdPartyRegistry) -> Self {
        Self {
            mode_renderer,
            registry,
        }
    }

    /// Render `violation` at `context` into a report-ready [`Diagnostic`].
    ///
    /// `location` is passed through unchanged. `origin` supplies the
    /// evidence trail for the source value's nullability.
    pub fn describe(
        &self,
        violation: &Violation,
        context: &AssignmentContext,
        location: SourceLocation,
        origin: &dyn Origin,
    ) -> Result<Diagnostic, ContractViolation> {
        let kind = classifier::issue_kind(context);
        let severity = classifier::severity(violation);

        // Mode-specific phrasing replaces generic composition wholesale.
        if violation.mode != Mode::Default
            && let Some(message) = self.mode_renderer.replacement_message(violation, context)
        {
            debug!(mode = ?violation.mode, "mode-specific diagnostic replaced generic composition");
            return Ok(Diagnostic::new(kind, severity, message, location));
        }

        // Field and return sites always carry their evidence; an argument
        // whose own text already explains its nullability does not.
        let attach_evidence = match context {
            AssignmentContext::ParameterPassing { actual_expr, .. } => {
                !origin.is_self_explanatory(actual_expr)
            }
            AssignmentContext::FieldAssignment { .. } | AssignmentContext::ReturnStatement { .. } => {
                true
            }
        };
        let evidence_suffix = if attach_evidence {
            origin
                .describe()
                .map(|text| format!(": {text}"))
                .unwrap_or_default()
        } else {
            String::new()
        };

        let message = match context {
            AssignmentContext::ParameterPassing {
                callee,
                param,
                actual_expr,
                provenance,
            } => self.parameter_message(
                violation,
                callee,
                param,
                actual_expr,
                provenance,
                &evidence_suffix,
            )?,
            AssignmentContext::FieldAssignment { field } => {
                let assigned = match violation.source {
                    Nullability::Null => "`null`",
                    Nullability::Nullable => "a nullable",
                    other => {
                        return Err(ContractViolation::new(format!(
                            "field assignment diagnostic requires a null or nullable source, got {other}"
                        )));
                    }
                };
                format!(
                    "{} is declared non-nullable but is assigned {assigned}{evidence_suffix}.",
                    monospaced(field)
                )
            }
            AssignmentContext::ReturnStatement { callee } => {
                let returned = match violation.source {
                    Nullability::Null => "`null`",
                    Nullability::Nullable => "a nullable value",
                    other => {
                        return Err(ContractViolation::new(format!(
                            "return diagnostic requires a null or nullable source, got {other}"
                        )));
                    }
                };
                format!(
                    "{}: return type is declared non-nullable but the method returns {returned}{evidence_suffix}.",
                    monospaced(callee)
                )
            }
        };

        Ok(Diagnostic::new(kind, severity, message, location))
    }

    fn parameter_message(
        &self,
        violation: &Violation,
        callee: &str,
        param: &ParamInfo,
        actual_expr: &str,
        provenance: &AnnotationProvenance,
        evidence_suffix: &str,
    ) -> Result<String, ContractViolation> {
        let nullability_word = match violation.source {
            Nullability::Null => "`null`",
            Nullability::Nullable => "nullable",
            other => {
                return Err(ContractViolation::new(format!(
                    "parameter diagnostic requires a null or nullable argument, got {other}"
                )));
            }
        };
        let argument_description = if actual_expr == "null" {
            "is `null`".to_string()
        } else {
            format!("{} is {nullability_word}", monospaced(actual_expr))
        };
        let name_part = if param.name.contains(SYNTHESIZED_NAME_MARKER) {
            String::new()
        } else {
            format!(" ({})", monospaced(&param.name))
        };

        // A callee modeled internally is never blamed on a missing
        // third-party signature, even when a signature entry exists.
        if !matches!(provenance, AnnotationProvenance::Models)
            && let Some(signature) = self.registry.lookup(callee)
        {
            let path = self.registry.user_facing_path(&signature.file);
            debug!(callee, path = %path, "suggesting third-party signature fix");
            return Ok(format!(
                "Third-party {callee} is missing a signature that would allow passing a nullable \
                 to parameter #{position}{name_part}. The argument {argument_description}\
                 {evidence_suffix}. Consider adding the correct signature of {callee} to {path}.",
                callee = monospaced(callee),
                position = param.position,
            ));
        }

        let nonnull_evidence = match provenance {
            AnnotationProvenance::None => String::new(),
            AnnotationProvenance::Models => " (according to internal models)".to_string(),
            AnnotationProvenance::ThirdParty { file, line } => {
                format!(" (see {} at line {line})", monospaced(file))
            }
        };
        Ok(format!(
            "{callee}: parameter #{position}{name_part} is declared non-nullable{nonnull_evidence} \
             but the argument {argument_description}{evidence_suffix}.",
            callee = monospaced(callee),
            position = param.position,
        ))
    }
}

//! The syntactic site of a checked assignment.

/// Where a parameter's non-null annotation came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationProvenance {
    /// No recorded annotation source.
    None,
    /// The checker's internal models of well-known APIs.
    Models,
    /// A third-party signature file.
    ThirdParty { file: String, line: u32 },
}

/// Declared parameter metadata, as the frontend reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    /// Display name. Frontends that lose the source-level name synthesize
    /// one containing [`crate::SYNTHESIZED_NAME_MARKER`]; such names are
    /// never shown to the user.
    pub name: String,
    /// 1-based position in the callee's parameter list.
    pub position: u32,
}

/// The syntactic site of a checked assignment.
///
/// Exhaustive by design: adding a new shape must force every renderer to
/// handle it, so no catch-all arms over this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentContext {
    /// An actual argument passed to a declared parameter.
    ParameterPassing {
        callee: String,
        param: ParamInfo,
        /// Literal text of the argument expression.
        actual_expr: String,
        provenance: AnnotationProvenance,
    },
    /// An assignment to a declared field.
    FieldAssignment { field: String },
    /// A value returned from the enclosing function.
    ReturnStatement { callee: String },
}

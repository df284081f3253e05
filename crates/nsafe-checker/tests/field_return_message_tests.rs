use nsafe_checker::{
    AssignmentContext, CheckOptions, DiagnosticComposer, OriginTrail, StrictModeMessages,
    ThirdPartyIndex, Violation, check,
};
use nsafe_common::{IssueKind, Severity, SourceLocation};
use nsafe_lattice::{Mode, Nullability};

fn violation(source: Nullability) -> Violation {
    Violation {
        mode: Mode::Default,
        target: Nullability::LocallyCheckedNonnull,
        source,
    }
}

fn location() -> SourceLocation {
    SourceLocation::new("User.java", 120, 4)
}

#[test]
fn test_field_assigned_nullable() {
    // End to end: the check fails, then the composer renders the field message.
    let rejected = check(
        Mode::Default,
        Nullability::LocallyCheckedNonnull,
        Nullability::Nullable,
        CheckOptions::default(),
    )
    .expect_err("nullable into non-nullable field must be rejected");

    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::FieldAssignment {
        field: "name".to_string(),
    };
    let diagnostic = composer
        .describe(&rejected, &context, location(), &OriginTrail::Unknown)
        .unwrap();

    assert_eq!(
        diagnostic.message_text,
        "`name` is declared non-nullable but is assigned a nullable."
    );
    assert_eq!(diagnostic.kind, IssueKind::FieldNotNullable);
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.location, location());
}

#[test]
fn test_field_assigned_null_literal() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::FieldAssignment {
        field: "name".to_string(),
    };
    let diagnostic = composer
        .describe(
            &violation(Nullability::Null),
            &context,
            location(),
            &OriginTrail::Unknown,
        )
        .unwrap();

    assert_eq!(
        diagnostic.message_text,
        "`name` is declared non-nullable but is assigned `null`."
    );
}

#[test]
fn test_field_evidence_is_always_attached() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::FieldAssignment {
        field: "name".to_string(),
    };
    let origin = OriginTrail::NullableCall {
        callee: "getName".to_string(),
    };
    let diagnostic = composer
        .describe(&violation(Nullability::Nullable), &context, location(), &origin)
        .unwrap();

    assert_eq!(
        diagnostic.message_text,
        "`name` is declared non-nullable but is assigned a nullable: \
         result of the nullable call `getName()`."
    );
}

#[test]
fn test_return_of_nullable_value() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::ReturnStatement {
        callee: "getName".to_string(),
    };
    let diagnostic = composer
        .describe(
            &violation(Nullability::Nullable),
            &context,
            location(),
            &OriginTrail::Unknown,
        )
        .unwrap();

    assert_eq!(
        diagnostic.message_text,
        "`getName`: return type is declared non-nullable but the method returns a nullable value."
    );
    assert_eq!(diagnostic.kind, IssueKind::ReturnNotNullable);
}

#[test]
fn test_return_of_null_literal_with_evidence() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::ReturnStatement {
        callee: "getName".to_string(),
    };
    let origin = OriginTrail::NullableFieldRead {
        field: "name".to_string(),
    };
    let diagnostic = composer
        .describe(&violation(Nullability::Null), &context, location(), &origin)
        .unwrap();

    assert_eq!(
        diagnostic.message_text,
        "`getName`: return type is declared non-nullable but the method returns `null`: \
         read of the nullable field `name`."
    );
}

#[test]
fn test_field_renderer_rejects_nonnull_source() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::FieldAssignment {
        field: "name".to_string(),
    };
    for source in [
        Nullability::ThirdPartyNonnull,
        Nullability::UncheckedNonnull,
        Nullability::LocallyTrustedNonnull,
        Nullability::LocallyCheckedNonnull,
        Nullability::StrictNonnull,
    ] {
        assert!(
            composer
                .describe(&violation(source), &context, location(), &OriginTrail::Unknown)
                .is_err(),
            "{source} must be a contract violation on the field path"
        );
    }
}

#[test]
fn test_return_renderer_rejects_nonnull_source() {
    let registry = ThirdPartyIndex::default();
    let composer = DiagnosticComposer::new(&StrictModeMessages, &registry);
    let context = AssignmentContext::ReturnStatement {
        callee: "getName".to_string(),
    };
    let result = composer.describe(
        &violation(Nullability::StrictNonnull),
        &context,
        location(),
        &OriginTrail::Unknown,
    );
    assert!(result.is_err());
}

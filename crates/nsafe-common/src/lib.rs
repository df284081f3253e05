//! Common types and utilities for the nsafe nullability checker.
//!
//! This crate provides foundational types used across all nsafe crates:
//! - Diagnostics (`Diagnostic`, `Severity`, `IssueKind`)
//! - Source locations (`SourceLocation`)
//! - Text markup helpers for diagnostic messages

// Diagnostics - severity, issue classification, rendered reports
pub mod diagnostics;
pub use diagnostics::{Diagnostic, IssueKind, Severity};

// Source location tracking (byte offsets)
pub mod position;
pub use position::SourceLocation;

// Text markup for identifiers/expressions inside messages
pub mod markup;

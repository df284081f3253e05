//! Text markup for diagnostic messages.
//!
//! Messages render identifiers and expressions as code spans so that
//! downstream surfaces (terminal, IDE, web) can style them. The markup is
//! plain backticks; the report pipeline owns any richer rendering.

/// Render `text` as a code span.
pub fn monospaced(text: &str) -> String {
    format!("`{text}`")
}

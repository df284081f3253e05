//! Source location tracking.
//!
//! Locations are byte-offset based (`start` + `length` into `file`), matching
//! what the report pipeline expects. The checker never inspects a location;
//! it only threads it through to the emitted diagnostic.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub start: u32,
    pub length: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, start: u32, length: u32) -> Self {
        Self {
            file: file.into(),
            start,
            length,
        }
    }

    /// Byte offset one past the end of the located range.
    pub fn end(&self) -> u32 {
        self.start + self.length
    }
}

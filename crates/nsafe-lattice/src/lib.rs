//! Nullability lattice and checking modes.
//!
//! This crate owns the type relations the checker consumes:
//!
//! - **`Nullability`**: the classification lattice. `Null` is the top and
//!   `StrictNonnull` the bottom; non-null variants are distinguished by the
//!   provenance that established non-nullness, ordered by trust.
//! - **`Mode`**: the strictness level a compilation unit is checked under.
//!   A mode decides the reporting severity and which non-null provenances
//!   it is willing to treat as non-null.
//!
//! Everything here is plain data with pure predicates; the assignment rule
//! itself lives in `nsafe-checker`.

mod mode;
mod nullability;

pub use mode::Mode;
pub use nullability::Nullability;

//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations caught at construction.
///
/// Lookup misses and invalid query ranges are not errors; they surface as
/// empty results.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cat name must not be blank")]
    EmptyName,

    #[error("cat weight must not be negative: {0}")]
    NegativeWeight(i32),
}

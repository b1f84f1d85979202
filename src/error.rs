//! Error types for layout construction.

use thiserror::Error;

/// Rejected column start positions.
///
/// Only layout construction can fail; line extraction is deliberately
/// permissive and degrades to empty fields instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The start-position list was empty.
    #[error("must have at least one column")]
    NoColumns,

    /// The first start position was zero. Positions are one-based.
    #[error("first column position must be positive; column positions are one-based")]
    NonPositiveStart,

    /// Two adjacent start positions were not strictly ascending, which
    /// would give the earlier column a zero or negative width.
    #[error(
        "column with zero or negative width detected; column positions must be in ascending order (position {next} follows {prev})"
    )]
    NonAscending { prev: usize, next: usize },
}

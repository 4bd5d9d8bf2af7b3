//! Error types for coordinate validation and distance measurement.
//!
//! All variants indicate a caller bug (invalid input), never a data
//! condition to recover from. They are cloneable and comparable so tests can
//! assert on the failing invariant.

use thiserror::Error;

/// Errors produced while building spaces and positions or measuring distances.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum DistanceError {
    /// A matching space or position has no dimensions.
    #[error("matching space must have at least one dimension")]
    EmptySpace,

    /// A space weight is negative or not finite.
    #[error("invalid weight {weight} for dimension {dimension}; weights must be finite and >= 0")]
    InvalidWeight { dimension: usize, weight: f64 },

    /// The weights, or their squares, do not sum to a finite value.
    #[error("weights of a {dimensions}-dimensional space overflow when summed")]
    WeightOverflow { dimensions: usize },

    /// Two positions, or a position and a space, disagree on dimensionality.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A subspace passed to measurement disagrees with the positions.
    #[error("subspace {index} has {actual} dimensions, positions have {expected}")]
    SubspaceDimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// The reference position has a missing coordinate.
    #[error("reference coordinate {dimension} is missing; only the target may have missing values")]
    MissingReference { dimension: usize },

    /// A value that should be numeric is NaN.
    #[error("value is NaN")]
    NotANumber,

    /// A value lies outside its legal range.
    #[error("value {value} is outside [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

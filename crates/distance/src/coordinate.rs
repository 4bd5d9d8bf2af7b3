//! Normalized coordinates and the constants that bound them.
//!
//! Every answer is mapped onto a signed range centred on zero before it takes
//! part in matching. The range is `[MIN, MAX] = [-EXTENT / 2, EXTENT / 2]`,
//! and measured distances live in the unsigned range `[0, EXTENT]`.

use serde::{Deserialize, Serialize};

use crate::error::DistanceError;

/// A coordinate after normalization, in `[MIN, MAX]`.
pub type SignedNormalizedDistance = f64;

/// A measured distance, in `[0, EXTENT]`.
pub type UnsignedNormalizedDistance = f64;

/// Length of the normalized coordinate range.
pub const EXTENT: f64 = 1.0;

/// Lower bound of a signed coordinate.
pub const MIN: SignedNormalizedDistance = -EXTENT / 2.0;

/// Upper bound of a signed coordinate.
pub const MAX: SignedNormalizedDistance = EXTENT / 2.0;

/// The neutral coordinate.
pub const NEUTRAL: SignedNormalizedDistance = 0.0;

/// One coordinate of a position: either a normalized value or the marker for
/// an answer that was not given.
///
/// `Missing` is never an operand of a metric. It is resolved by
/// [`crate::impute_missing_values`] before measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    Value(SignedNormalizedDistance),
    #[default]
    Missing,
}

impl Coordinate {
    pub fn is_missing(&self) -> bool {
        matches!(self, Coordinate::Missing)
    }

    /// The normalized value, or `None` for a missing coordinate.
    pub fn value(&self) -> Option<SignedNormalizedDistance> {
        match self {
            Coordinate::Value(v) => Some(*v),
            Coordinate::Missing => None,
        }
    }

    /// Build a checked coordinate. Fails on NaN or values outside `[MIN, MAX]`.
    pub fn checked(value: f64) -> Result<Self, DistanceError> {
        assert_signed(value).map(Coordinate::Value)
    }
}

impl From<SignedNormalizedDistance> for Coordinate {
    fn from(value: SignedNormalizedDistance) -> Self {
        Coordinate::Value(value)
    }
}

impl From<Option<SignedNormalizedDistance>> for Coordinate {
    fn from(value: Option<SignedNormalizedDistance>) -> Self {
        value.map_or(Coordinate::Missing, Coordinate::Value)
    }
}

/// Ensure `value` is a legal signed coordinate.
pub fn assert_signed(value: f64) -> Result<SignedNormalizedDistance, DistanceError> {
    assert_range(value, MIN, MAX)
}

/// Ensure `value` is a legal unsigned distance.
pub fn assert_unsigned(value: f64) -> Result<UnsignedNormalizedDistance, DistanceError> {
    assert_range(value, 0.0, EXTENT)
}

fn assert_range(value: f64, min: f64, max: f64) -> Result<f64, DistanceError> {
    if value.is_nan() {
        return Err(DistanceError::NotANumber);
    }
    if value < min || value > max {
        return Err(DistanceError::OutOfRange { value, min, max });
    }
    Ok(value)
}

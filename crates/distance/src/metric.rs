//! Per-dimension distance metrics and how they aggregate over dimensions.
//!
//! Every metric takes two resolved coordinates in `[MIN, MAX]` and returns a
//! distance in `[0, EXTENT]`. They are commutative. Manhattan and Directional
//! sum the weighted per-dimension distances; Euclidean takes the root of the
//! sum of their squares.
//!
//! Reference for the directional metric: Mendez (2017), "Modeling proximity
//! and directional decisional logic", Journal of Elections, Public Opinion and
//! Parties 27:1, p. 51.

use serde::{Deserialize, Serialize};

use crate::coordinate::{SignedNormalizedDistance, UnsignedNormalizedDistance, EXTENT, NEUTRAL};

/// Selects the per-dimension metric used by distance measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Absolute difference. The usual choice for voting advice applications.
    #[default]
    Manhattan,
    /// Agreement-based distance that treats the neutral answer as uncertainty.
    ///
    /// This is not a true metric. If either side is neutral the distance is
    /// half the extent, and two identical non-extreme answers are *not* at
    /// distance zero: two mild agreements (`MAX / 2` each) are at `0.375`.
    /// Only answers at the extremes can reach full agreement.
    Directional,
    /// Absolute difference per dimension, aggregated as the square root of
    /// the sum of squared weighted distances.
    Euclidean,
}

impl DistanceMetric {
    /// Distance between two resolved coordinates in one dimension.
    #[inline]
    pub fn distance(
        self,
        a: SignedNormalizedDistance,
        b: SignedNormalizedDistance,
    ) -> UnsignedNormalizedDistance {
        match self {
            DistanceMetric::Manhattan | DistanceMetric::Euclidean => manhattan_distance(a, b),
            DistanceMetric::Directional => directional_distance(a, b),
        }
    }

    /// Contribution of one dimension with weight `weight` to the aggregate.
    #[inline]
    pub fn weighted_term(self, weight: f64, distance: UnsignedNormalizedDistance) -> f64 {
        match self {
            DistanceMetric::Manhattan | DistanceMetric::Directional => weight * distance,
            DistanceMetric::Euclidean => (weight * distance).powi(2),
        }
    }

    /// Turn a sum of [`weighted_term`](Self::weighted_term)s into a length.
    #[inline]
    pub fn finish_sum(self, sum: f64) -> f64 {
        match self {
            DistanceMetric::Manhattan | DistanceMetric::Directional => sum,
            DistanceMetric::Euclidean => sum.sqrt(),
        }
    }

    /// Weight of each of the `dimensions` coordinates a single question
    /// spans, chosen so that the question's largest possible contribution
    /// equals that of a one-dimensional question.
    pub fn subdimension_weight(self, dimensions: usize) -> f64 {
        let n = dimensions.max(1) as f64;
        match self {
            DistanceMetric::Manhattan | DistanceMetric::Directional => 1.0 / n,
            DistanceMetric::Euclidean => 1.0 / n.sqrt(),
        }
    }
}

/// `|a - b|`
#[inline]
pub fn manhattan_distance(
    a: SignedNormalizedDistance,
    b: SignedNormalizedDistance,
) -> UnsignedNormalizedDistance {
    (a - b).abs()
}

/// `EXTENT / 2 - 2 * a * b / EXTENT`, with coordinates taken relative to
/// [`NEUTRAL`].
#[inline]
pub fn directional_distance(
    a: SignedNormalizedDistance,
    b: SignedNormalizedDistance,
) -> UnsignedNormalizedDistance {
    0.5 * EXTENT - (2.0 * (a - NEUTRAL) * (b - NEUTRAL)) / EXTENT
}

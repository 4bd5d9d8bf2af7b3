//! Distance measurement between two positions.
//!
//! The reference position (e.g. the voter) must be fully specified. Missing
//! target coordinates are imputed against the reference, so swapping the two
//! positions generally changes the result.

use serde::{Deserialize, Serialize};

use crate::coordinate::{Coordinate, UnsignedNormalizedDistance, EXTENT};
use crate::error::DistanceError;
use crate::impute::{impute_missing_values, MissingValueOptions};
use crate::metric::DistanceMetric;
use crate::space::{MatchingSpace, Position};

/// Metric and imputation policy used for a measurement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MeasurementOptions {
    pub metric: DistanceMetric,
    pub missing_value_options: MissingValueOptions,
}

/// Result of measuring in a space and a list of subspaces in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalAndSubspaceDistances {
    pub global: UnsignedNormalizedDistance,
    /// One distance per subspace, in the order the subspaces were given.
    pub subspaces: Vec<UnsignedNormalizedDistance>,
}

/// Measure the normalized distance between `reference` and `target`.
pub fn measure_distance(
    reference: &Position,
    target: &Position,
    options: &MeasurementOptions,
) -> Result<UnsignedNormalizedDistance, DistanceError> {
    measure(reference, target, options, &[]).map(|d| d.global)
}

/// Measure the distance in the positions' space and, in the same pass, in
/// each of `subspaces`.
///
/// Subspaces are typically derived by zeroing the weights of dimensions
/// outside a question category. A subspace whose weights sum to zero yields a
/// distance of `0`. Subspace distances aggregate the same way as the global
/// one, so a Euclidean subspace distance is a root of squares too.
pub fn measure_distance_with_subspaces(
    reference: &Position,
    target: &Position,
    options: &MeasurementOptions,
    subspaces: &[MatchingSpace],
) -> Result<GlobalAndSubspaceDistances, DistanceError> {
    measure(reference, target, options, subspaces)
}

fn measure(
    reference: &Position,
    target: &Position,
    options: &MeasurementOptions,
    subspaces: &[MatchingSpace],
) -> Result<GlobalAndSubspaceDistances, DistanceError> {
    let dimensions = reference.dimensions();
    if dimensions == 0 {
        return Err(DistanceError::EmptySpace);
    }
    if target.dimensions() != dimensions {
        return Err(DistanceError::DimensionMismatch {
            expected: dimensions,
            actual: target.dimensions(),
        });
    }
    for space in [reference.space(), target.space()].into_iter().flatten() {
        if space.dimensions() != dimensions {
            return Err(DistanceError::DimensionMismatch {
                expected: dimensions,
                actual: space.dimensions(),
            });
        }
    }
    for (index, subspace) in subspaces.iter().enumerate() {
        if subspace.dimensions() != dimensions {
            return Err(DistanceError::SubspaceDimensionMismatch {
                index,
                expected: dimensions,
                actual: subspace.dimensions(),
            });
        }
    }

    // The reference's space wins when both positions carry one.
    let space = reference.space().or(target.space());
    let weights = space.map(|s| s.weights());
    let metric = options.metric;

    let mut global = 0.0;
    let mut sums = vec![0.0; subspaces.len()];

    for i in 0..dimensions {
        let a = match reference.coordinates()[i] {
            Coordinate::Value(v) => v,
            Coordinate::Missing => return Err(DistanceError::MissingReference { dimension: i }),
        };
        let (a, b) = match target.coordinates()[i] {
            Coordinate::Value(v) => (a, v),
            Coordinate::Missing => impute_missing_values(a, &options.missing_value_options),
        };
        let d = metric.distance(a, b);
        global += metric.weighted_term(weights.map_or(1.0, |w| w[i]), d);
        for (sum, subspace) in sums.iter_mut().zip(subspaces) {
            *sum += metric.weighted_term(subspace.weights()[i], d);
        }
    }

    let max = match weights {
        Some(w) => max_sum(metric, w),
        None => dimensions as f64 * metric.weighted_term(1.0, 1.0),
    };
    let subspaces = sums
        .into_iter()
        .zip(subspaces)
        .map(|(sum, subspace)| normalize(metric, sum, max_sum(metric, subspace.weights())))
        .collect();

    Ok(GlobalAndSubspaceDistances {
        global: normalize(metric, global, max),
        subspaces,
    })
}

/// The aggregate sum when every dimension is at unit distance.
fn max_sum(metric: DistanceMetric, weights: &[f64]) -> f64 {
    weights.iter().map(|&w| metric.weighted_term(w, 1.0)).sum()
}

#[inline]
fn normalize(metric: DistanceMetric, sum: f64, max: f64) -> UnsignedNormalizedDistance {
    let max = metric.finish_sum(max);
    if max > 0.0 {
        (metric.finish_sum(sum) / max).clamp(0.0, EXTENT)
    } else {
        0.0
    }
}

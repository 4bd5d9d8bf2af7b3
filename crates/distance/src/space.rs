//! Matching spaces and positions within them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::coordinate::{assert_signed, Coordinate};
use crate::error::DistanceError;

/// A weighted coordinate system in which positions are compared.
///
/// Each dimension carries a non-negative weight. The sum of the weights is
/// the largest aggregate distance two positions can have and is used to
/// normalize measured distances back into `[0, EXTENT]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpace")]
pub struct MatchingSpace {
    weights: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSpace {
    weights: Vec<f64>,
}

impl TryFrom<RawSpace> for MatchingSpace {
    type Error = DistanceError;

    fn try_from(raw: RawSpace) -> Result<Self, Self::Error> {
        Self::new(raw.weights)
    }
}

impl MatchingSpace {
    /// Create a space from per-dimension weights.
    ///
    /// Fails if there are no weights, any weight is negative or not finite,
    /// or the weights (or their squares, used by the Euclidean metric) sum to
    /// infinity. A space whose weights are all zero is legal: distances
    /// measured in it are zero.
    pub fn new(weights: Vec<f64>) -> Result<Self, DistanceError> {
        if weights.is_empty() {
            return Err(DistanceError::EmptySpace);
        }
        if let Some((dimension, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(DistanceError::InvalidWeight { dimension, weight });
        }
        let sum: f64 = weights.iter().sum();
        let sum_of_squares: f64 = weights.iter().map(|w| w * w).sum();
        if !sum.is_finite() || !sum_of_squares.is_finite() {
            return Err(DistanceError::WeightOverflow {
                dimensions: weights.len(),
            });
        }
        Ok(Self { weights })
    }

    /// A space of `dimensions` dimensions with unit weights.
    pub fn uniform(dimensions: usize) -> Result<Self, DistanceError> {
        Self::new(vec![1.0; dimensions])
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    pub fn max_distance(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// A point in a matching space. Coordinates may be missing.
///
/// Positions are immutable. When a space is attached the coordinate count is
/// checked against it at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    coordinates: Vec<Coordinate>,
    space: Option<Arc<MatchingSpace>>,
}

impl Position {
    /// Create a position that belongs to `space`.
    pub fn new(
        coordinates: Vec<Coordinate>,
        space: Arc<MatchingSpace>,
    ) -> Result<Self, DistanceError> {
        if coordinates.len() != space.dimensions() {
            return Err(DistanceError::DimensionMismatch {
                expected: space.dimensions(),
                actual: coordinates.len(),
            });
        }
        validate_coordinates(&coordinates)?;
        Ok(Self {
            coordinates,
            space: Some(space),
        })
    }

    /// Create a position without a space. Measurement then weighs every
    /// dimension equally.
    pub fn detached(coordinates: Vec<Coordinate>) -> Result<Self, DistanceError> {
        if coordinates.is_empty() {
            return Err(DistanceError::EmptySpace);
        }
        validate_coordinates(&coordinates)?;
        Ok(Self {
            coordinates,
            space: None,
        })
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn space(&self) -> Option<&Arc<MatchingSpace>> {
        self.space.as_ref()
    }

    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    pub fn into_coordinates(self) -> Vec<Coordinate> {
        self.coordinates
    }
}

fn validate_coordinates(coordinates: &[Coordinate]) -> Result<(), DistanceError> {
    for c in coordinates {
        if let Coordinate::Value(v) = c {
            assert_signed(*v)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::{MAX, MIN};

    #[test]
    fn space_derives_dimensions_and_max_distance() {
        let space = MatchingSpace::new(vec![1.0, 2.0, 0.5]).expect("valid space");
        assert_eq!(space.dimensions(), 3);
        assert_eq!(space.max_distance(), 3.5);
        assert_eq!(MatchingSpace::uniform(4).expect("uniform").weights(), &[1.0; 4]);
    }

    #[test]
    fn space_rejects_empty_and_invalid_weights() {
        assert_eq!(MatchingSpace::new(vec![]), Err(DistanceError::EmptySpace));
        assert!(matches!(
            MatchingSpace::new(vec![1.0, -1.0]),
            Err(DistanceError::InvalidWeight { dimension: 1, .. })
        ));
        assert!(matches!(
            MatchingSpace::new(vec![f64::NAN]),
            Err(DistanceError::InvalidWeight { dimension: 0, .. })
        ));
    }

    #[test]
    fn space_rejects_weights_whose_sum_overflows() {
        assert_eq!(
            MatchingSpace::new(vec![f64::MAX, f64::MAX]),
            Err(DistanceError::WeightOverflow { dimensions: 2 })
        );
        // Finite sum, but the squares overflow.
        assert_eq!(
            MatchingSpace::new(vec![1e200, 1.0]),
            Err(DistanceError::WeightOverflow { dimensions: 2 })
        );
        assert!(MatchingSpace::new(vec![1e150, 1e150]).is_ok());
    }

    #[test]
    fn deserialized_space_is_validated() {
        let space: MatchingSpace =
            serde_json::from_str(r#"{"weights":[1.0,0.5]}"#).expect("valid space");
        assert_eq!(space.max_distance(), 1.5);
        assert!(serde_json::from_str::<MatchingSpace>(r#"{"weights":[1.0,-2.0]}"#).is_err());
        assert!(serde_json::from_str::<MatchingSpace>(r#"{"weights":[]}"#).is_err());
    }

    #[test]
    fn zero_weight_space_is_legal() {
        let space = MatchingSpace::new(vec![0.0, 0.0]).expect("zero weights");
        assert_eq!(space.max_distance(), 0.0);
    }

    #[test]
    fn position_must_match_space_dimensions() {
        let space = Arc::new(MatchingSpace::uniform(3).expect("uniform"));
        let ok = Position::new(
            vec![MIN.into(), Coordinate::Missing, MAX.into()],
            space.clone(),
        );
        assert!(ok.is_ok());
        let err = Position::new(vec![MIN.into(), MAX.into()], space);
        assert_eq!(
            err,
            Err(DistanceError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn position_rejects_out_of_range_coordinates() {
        assert!(matches!(
            Position::detached(vec![Coordinate::Value(0.9)]),
            Err(DistanceError::OutOfRange { .. })
        ));
        assert_eq!(Position::detached(vec![]), Err(DistanceError::EmptySpace));
    }
}

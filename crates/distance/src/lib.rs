//! # votematch distance primitives
//!
//! Normalized coordinates, per-dimension metrics, missing-value imputation
//! and weighted matching spaces. This crate is the numeric core of the
//! matching engine and knows nothing about questions or entities.
//!
//! ## Contract
//!
//! - Coordinates live in `[MIN, MAX] = [-EXTENT / 2, EXTENT / 2]`, zero being
//!   neutral. Measured distances live in `[0, EXTENT]`.
//! - A [`Coordinate::Missing`] is only ever legal in the *target* position of
//!   a measurement. It is resolved by [`impute_missing_values`] against the
//!   reference coordinate before any metric runs.
//! - Every function is pure: no I/O, no global state, no allocation in the
//!   per-dimension loop beyond the per-subspace accumulators.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use distance::{
//!     measure_distance, Coordinate, DistanceMetric, MatchingSpace, MeasurementOptions,
//!     MissingValueMethod, MissingValueOptions, Position, MAX, MIN,
//! };
//!
//! let space = Arc::new(MatchingSpace::uniform(2).unwrap());
//! let voter = Position::new(vec![MIN.into(), MAX.into()], space.clone()).unwrap();
//! let party = Position::new(vec![MIN.into(), Coordinate::Missing], space).unwrap();
//!
//! let options = MeasurementOptions {
//!     metric: DistanceMetric::Manhattan,
//!     missing_value_options: MissingValueOptions::new(MissingValueMethod::Neutral),
//! };
//! let d = measure_distance(&voter, &party, &options).unwrap();
//! assert_eq!(d, 0.25);
//! ```

pub mod coordinate;
pub mod error;
pub mod impute;
pub mod measure;
pub mod metric;
pub mod space;

pub use crate::coordinate::{
    assert_signed, assert_unsigned, Coordinate, SignedNormalizedDistance,
    UnsignedNormalizedDistance, EXTENT, MAX, MIN, NEUTRAL,
};
pub use crate::error::DistanceError;
pub use crate::impute::{
    impute_missing_values, MissingValueBias, MissingValueMethod, MissingValueOptions,
};
pub use crate::measure::{
    measure_distance, measure_distance_with_subspaces, GlobalAndSubspaceDistances,
    MeasurementOptions,
};
pub use crate::metric::{directional_distance, manhattan_distance, DistanceMetric};
pub use crate::space::{MatchingSpace, Position};

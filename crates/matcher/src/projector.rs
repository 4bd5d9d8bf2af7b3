//! Optional dimensionality reduction applied to the projected positions.

use distance::Position;

use crate::types::MatchError;

/// Maps a batch of positions into another, usually lower-dimensional, space.
///
/// The batch holds the reference position first and then one position per
/// target. Implementations must return the same number of positions in the
/// same order.
pub trait MatchingSpaceProjector {
    fn project(&self, positions: Vec<Position>) -> Result<Vec<Position>, MatchError>;
}

impl<T: MatchingSpaceProjector + ?Sized> MatchingSpaceProjector for &T {
    fn project(&self, positions: Vec<Position>) -> Result<Vec<Position>, MatchError> {
        (**self).project(positions)
    }
}

impl<T: MatchingSpaceProjector + ?Sized> MatchingSpaceProjector for Box<T> {
    fn project(&self, positions: Vec<Position>) -> Result<Vec<Position>, MatchError> {
        (**self).project(positions)
    }
}

/// The identity projector used when no projector is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoProjection;

impl MatchingSpaceProjector for NoProjection {
    #[inline]
    fn project(&self, positions: Vec<Position>) -> Result<Vec<Position>, MatchError> {
        Ok(positions)
    }
}

/// Adapts a closure into a projector.
#[derive(Clone, Copy)]
pub struct FnProjector<F>(pub F);

impl<F> MatchingSpaceProjector for FnProjector<F>
where
    F: Fn(Vec<Position>) -> Result<Vec<Position>, MatchError>,
{
    fn project(&self, positions: Vec<Position>) -> Result<Vec<Position>, MatchError> {
        (self.0)(positions)
    }
}

impl<F> std::fmt::Debug for FnProjector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnProjector")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use distance::{Coordinate, MAX, MIN};

    fn batch() -> Vec<Position> {
        vec![
            Position::detached(vec![MIN.into(), MAX.into()]).expect("position"),
            Position::detached(vec![MAX.into(), Coordinate::Missing]).expect("position"),
        ]
    }

    #[test]
    fn no_projection_is_identity() -> Result<(), MatchError> {
        let input = batch();
        let output = NoProjection.project(input.clone())?;
        assert_eq!(output, input);
        Ok(())
    }

    #[test]
    fn closures_project_through_fn_projector() -> Result<(), MatchError> {
        let first_dimension =
            FnProjector(|positions: Vec<Position>| -> Result<Vec<Position>, MatchError> {
                positions
                    .into_iter()
                    .map(|p| {
                        let first = p.coordinates()[0];
                        Position::detached(vec![first]).map_err(MatchError::from)
                    })
                    .collect()
            });
        let boxed: Box<dyn MatchingSpaceProjector> = Box::new(first_dimension);
        let output = boxed.project(batch())?;
        assert_eq!(output.len(), 2);
        assert!(output.iter().all(|p| p.dimensions() == 1));
        assert_eq!(output[1].coordinates(), &[Coordinate::Value(MAX)]);
        Ok(())
    }
}

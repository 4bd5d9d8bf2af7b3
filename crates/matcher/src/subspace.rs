//! Matching spaces derived from question lists.
//!
//! Every question contributes `normalized_dimensions` coordinates. Each of
//! them gets `question_weight` times the metric's sub-dimension weight
//! (`1 / n` for Manhattan and Directional, `1 / sqrt(n)` for Euclidean), so a
//! question weighs the same no matter how many dimensions it spans.

use std::collections::{HashMap, HashSet};

use distance::{DistanceMetric, MatchingSpace};

use crate::question::MatchableQuestion;
use crate::types::MatchError;

/// Build the space spanned by `questions`, with optional per-question weights
/// (default `1`).
pub fn matching_space_from_questions<Q: MatchableQuestion>(
    questions: &[Q],
    question_weights: Option<&HashMap<String, f64>>,
    metric: DistanceMetric,
) -> Result<MatchingSpace, MatchError> {
    let weights = expand_weights(questions, question_weights, metric, |_| true)?;
    Ok(MatchingSpace::new(weights)?)
}

/// Build a subspace of the space spanned by `questions` in which only the
/// dimensions of questions present in `subset` keep their weight.
///
/// Membership is decided by question id. When no question of `subset` occurs
/// in `questions`, the subspace has zero total weight and every distance
/// measured in it is `0`.
///
/// Multi-dimensional questions are split for the summing metrics; use
/// [`create_weighted_subspace`] to target the Euclidean metric.
pub fn create_subspace<Q, S>(questions: &[Q], subset: &[S]) -> Result<MatchingSpace, MatchError>
where
    Q: MatchableQuestion,
    S: MatchableQuestion,
{
    create_weighted_subspace(questions, subset, None, DistanceMetric::Manhattan)
}

/// [`create_subspace`] with optional per-question weights, split over
/// dimensions the way `metric` aggregates them.
pub fn create_weighted_subspace<Q, S>(
    questions: &[Q],
    subset: &[S],
    question_weights: Option<&HashMap<String, f64>>,
    metric: DistanceMetric,
) -> Result<MatchingSpace, MatchError>
where
    Q: MatchableQuestion,
    S: MatchableQuestion,
{
    let members: HashSet<&str> = subset.iter().map(|q| q.id()).collect();
    let weights = expand_weights(questions, question_weights, metric, |id| {
        members.contains(id)
    })?;
    Ok(MatchingSpace::new(weights)?)
}

fn expand_weights<Q, F>(
    questions: &[Q],
    question_weights: Option<&HashMap<String, f64>>,
    metric: DistanceMetric,
    include: F,
) -> Result<Vec<f64>, MatchError>
where
    Q: MatchableQuestion,
    F: Fn(&str) -> bool,
{
    let mut weights = Vec::with_capacity(questions.len());
    for q in questions {
        let dims = q.normalized_dimensions();
        let question_weight = match question_weights.and_then(|w| w.get(q.id())) {
            Some(&w) if !w.is_finite() || w < 0.0 => {
                return Err(MatchError::InvalidQuestionWeight {
                    question_id: q.id().to_string(),
                    weight: w,
                })
            }
            Some(&w) => w,
            None => 1.0,
        };
        let w = if include(q.id()) {
            question_weight * metric.subdimension_weight(dims)
        } else {
            0.0
        };
        weights.extend(std::iter::repeat(w).take(dims));
    }
    Ok(weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{CategoricalQuestion, OrdinalQuestion, Question};
    use distance::DistanceError;

    fn questions() -> Vec<Question> {
        vec![
            OrdinalQuestion::from_likert("q1", 5).expect("likert").into(),
            OrdinalQuestion::from_likert("q2", 5).expect("likert").into(),
            CategoricalQuestion::new("q3", ["a", "b", "c", "d"])
                .expect("categorical")
                .into(),
        ]
    }

    #[test]
    fn full_space_splits_question_weight_over_dimensions() {
        let qs = questions();
        let space =
            matching_space_from_questions(&qs, None, DistanceMetric::Manhattan).expect("space");
        assert_eq!(space.weights(), &[1.0, 1.0, 0.25, 0.25, 0.25, 0.25]);
        assert_eq!(space.max_distance(), 3.0);
    }

    #[test]
    fn euclidean_space_splits_by_root_of_dimensions() {
        let qs = questions();
        let weights = HashMap::from([("q3".to_string(), 2.0)]);
        let space = matching_space_from_questions(&qs, Some(&weights), DistanceMetric::Euclidean)
            .expect("space");
        assert_eq!(space.weights(), &[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let sub = create_weighted_subspace(&qs, &qs[2..], None, DistanceMetric::Euclidean)
            .expect("subspace");
        assert_eq!(sub.weights(), &[0.0, 0.0, 0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn question_weights_default_to_one() {
        let qs = questions();
        let weights = HashMap::from([("q1".to_string(), 2.0), ("q3".to_string(), 4.0)]);
        let space = matching_space_from_questions(&qs, Some(&weights), DistanceMetric::Manhattan)
            .expect("space");
        assert_eq!(space.weights(), &[2.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn negative_question_weight_is_rejected() {
        let qs = questions();
        let weights = HashMap::from([("q2".to_string(), -1.0)]);
        assert!(matches!(
            matching_space_from_questions(&qs, Some(&weights), DistanceMetric::Manhattan),
            Err(MatchError::InvalidQuestionWeight { .. })
        ));
    }

    #[test]
    fn overflowing_question_weights_are_rejected() {
        let qs = questions();
        let weights = HashMap::from([("q1".to_string(), 1e308), ("q2".to_string(), 1e308)]);
        assert!(matches!(
            matching_space_from_questions(&qs, Some(&weights), DistanceMetric::Manhattan),
            Err(MatchError::Distance(DistanceError::WeightOverflow { dimensions: 6 }))
        ));
    }

    #[test]
    fn subspace_zeroes_weights_outside_the_subset() {
        let qs = questions();
        let space = create_subspace(&qs, &qs[1..]).expect("subspace");
        assert_eq!(space.weights(), &[0.0, 1.0, 0.25, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn disjoint_subset_yields_zero_max_distance() {
        let qs = questions();
        let other = vec![OrdinalQuestion::from_likert("elsewhere", 5).expect("likert")];
        let space = create_subspace(&qs, &other).expect("subspace");
        assert_eq!(space.max_distance(), 0.0);
        assert_eq!(space.dimensions(), 6);
    }
}

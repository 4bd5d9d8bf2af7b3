use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use distance::{
    measure_distance, measure_distance_with_subspaces, DistanceMetric, MatchingSpace,
    MeasurementOptions, Position,
};
use rayon::prelude::*;
use tracing::{debug, info, warn, Level};

use crate::entity::HasAnswers;
use crate::projector::{MatchingSpaceProjector, NoProjection};
use crate::question::{MatchableQuestion, MatchableQuestionGroup};
use crate::subspace::{create_weighted_subspace, matching_space_from_questions};
use crate::types::{Match, MatchError, MatchingAlgorithmOptions, MatchingOptions, SubMatch};


/// Matches a reference entity (e.g. a voter) against target entities (e.g.
/// candidates or parties).
///
/// The algorithm:
/// 1. projects every entity's answers into a normalized matching space whose
///    dimensions all range over `[MIN, MAX]`,
/// 2. optionally reprojects the positions with a [`MatchingSpaceProjector`],
/// 3. measures the distance of each target to the reference and sorts the
///    targets by ascending distance.
///
/// The algorithm holds no mutable state and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct MatchingAlgorithm<P = NoProjection> {
    options: MatchingAlgorithmOptions,
    projector: P,
}

impl MatchingAlgorithm<NoProjection> {
    pub fn new(options: MatchingAlgorithmOptions) -> Self {
        Self {
            options,
            projector: NoProjection,
        }
    }
}

impl<P: MatchingSpaceProjector> MatchingAlgorithm<P> {
    /// Replace the projector. Sub-group matching needs the projected
    /// positions to keep the dimensions of the question list, otherwise
    /// measurement fails with a subspace dimension mismatch.
    pub fn with_projector<R: MatchingSpaceProjector>(self, projector: R) -> MatchingAlgorithm<R> {
        MatchingAlgorithm {
            options: self.options,
            projector,
        }
    }

    pub fn options(&self) -> &MatchingAlgorithmOptions {
        &self.options
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Match `targets` against `reference` using default [`MatchingOptions`].
    ///
    /// Only the questions `reference` has answered take part.
    pub fn match_entities<'a, Q, R, E>(
        &self,
        questions: &[Q],
        reference: &R,
        targets: &'a [E],
    ) -> Result<Vec<Match<'a, E>>, MatchError>
    where
        Q: MatchableQuestion,
        R: HasAnswers,
        E: HasAnswers + Sync,
    {
        self.match_with_options(questions, reference, targets, &MatchingOptions::default())
    }

    /// Match `targets` against `reference`, optionally computing a sub-match
    /// per question group and applying question weights.
    ///
    /// Matches are sorted by ascending distance. Targets at equal distance
    /// keep their input order.
    pub fn match_with_options<'a, Q, R, E, G>(
        &self,
        questions: &[Q],
        reference: &R,
        targets: &'a [E],
        options: &MatchingOptions<'a, G>,
    ) -> Result<Vec<Match<'a, E, G>>, MatchError>
    where
        Q: MatchableQuestion,
        R: HasAnswers,
        E: HasAnswers + Sync,
        G: MatchableQuestionGroup + Sync,
    {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.match",
            questions = questions.len(),
            targets = targets.len(),
            groups = options.question_groups.map_or(0, <[G]>::len),
            metric = ?self.options.distance_metric
        );
        let _guard = span.enter();

        match self.match_inner(questions, reference, targets, options) {
            Ok((matches, answered)) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    answered_questions = answered,
                    matches = matches.len(),
                    parallel = self.options.use_parallel,
                    elapsed_micros,
                    "match_success"
                );
                Ok(matches)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "match_failure");
                Err(err)
            }
        }
    }

    fn match_inner<'a, Q, R, E, G>(
        &self,
        questions: &[Q],
        reference: &R,
        targets: &'a [E],
        options: &MatchingOptions<'a, G>,
    ) -> Result<(Vec<Match<'a, E, G>>, usize), MatchError>
    where
        Q: MatchableQuestion,
        R: HasAnswers,
        E: HasAnswers + Sync,
        G: MatchableQuestionGroup + Sync,
    {
        if questions.is_empty() {
            return Err(MatchError::EmptyQuestions);
        }
        if targets.is_empty() {
            return Err(MatchError::EmptyTargets);
        }
        ensure_unique_ids(questions)?;

        let answered: Vec<&Q> = questions
            .iter()
            .filter(|q| {
                let has_answer = reference.answer_value(q.id()).is_some();
                if !has_answer {
                    debug!(question_id = %q.id(), "skipping question unanswered by reference");
                }
                has_answer
            })
            .collect();
        if answered.is_empty() {
            return Err(MatchError::NoAnsweredQuestions {
                question_count: questions.len(),
            });
        }

        let weights = options.question_weights.as_ref();
        let metric = self.options.distance_metric;
        let mut entities: Vec<&dyn HasAnswers> = Vec::with_capacity(targets.len() + 1);
        entities.push(reference);
        entities.extend(targets.iter().map(|t| t as &dyn HasAnswers));

        let projected = project_to_normalized_space(&answered, &entities, weights, metric)?;
        let expected = projected.len();
        let mut positions = self.projector.project(projected)?;
        if positions.len() != expected {
            return Err(MatchError::ProjectionCountMismatch {
                expected,
                actual: positions.len(),
            });
        }
        let target_positions = positions.split_off(1);
        let Some(reference_position) = positions.pop() else {
            return Err(MatchError::ProjectionCountMismatch {
                expected,
                actual: 0,
            });
        };
        debug!(
            dimensions = reference_position.dimensions(),
            "positions projected"
        );

        let subspaces: Vec<MatchingSpace> = match options.question_groups {
            Some(groups) => groups
                .iter()
                .map(|g| {
                    create_weighted_subspace(&answered, g.matchable_questions(), weights, metric)
                })
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };

        let measurement = self.options.measurement_options();
        let groups = options.question_groups;
        let measure_one = |(entity, position): (&'a E, &Position)| {
            measure_target(
                &reference_position,
                position,
                entity,
                &measurement,
                groups,
                &subspaces,
            )
        };

        let mut matches: Vec<Match<'a, E, G>> = if self.options.use_parallel {
            targets
                .par_iter()
                .zip(target_positions.par_iter())
                .map(measure_one)
                .collect::<Result<_, _>>()?
        } else {
            targets
                .iter()
                .zip(target_positions.iter())
                .map(measure_one)
                .collect::<Result<_, _>>()?
        };

        // Stable, so equal distances keep the target order.
        matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok((matches, answered.len()))
    }
}

fn measure_target<'a, E, G>(
    reference: &Position,
    target: &Position,
    entity: &'a E,
    measurement: &MeasurementOptions,
    groups: Option<&'a [G]>,
    subspaces: &[MatchingSpace],
) -> Result<Match<'a, E, G>, MatchError> {
    match groups {
        None => {
            let distance = measure_distance(reference, target, measurement)?;
            Ok(Match::new(distance, entity))
        }
        Some(groups) => {
            let distances =
                measure_distance_with_subspaces(reference, target, measurement, subspaces)?;
            let sub_matches = groups
                .iter()
                .zip(distances.subspaces)
                .map(|(group, distance)| SubMatch::new(distance, group))
                .collect();
            Ok(Match::new(distances.global, entity).with_sub_matches(sub_matches))
        }
    }
}

fn ensure_unique_ids<Q: MatchableQuestion>(questions: &[Q]) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(questions.len());
    for q in questions {
        if !seen.insert(q.id()) {
            return Err(MatchError::DuplicateQuestionId {
                question_id: q.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Project `entities` into the normalized space spanned by `questions`.
///
/// Every coordinate of a question weighs `question_weight` times
/// `metric.subdimension_weight(normalized_dimensions)`, the question weight
/// defaulting to `1`. Multi-dimensional answers are flattened in question
/// order. Returns one position per entity, all sharing the same space.
pub fn project_to_normalized_space<Q: MatchableQuestion>(
    questions: &[Q],
    entities: &[&dyn HasAnswers],
    question_weights: Option<&HashMap<String, f64>>,
    metric: DistanceMetric,
) -> Result<Vec<Position>, MatchError> {
    if questions.is_empty() {
        return Err(MatchError::EmptyQuestions);
    }
    if entities.is_empty() {
        return Err(MatchError::EmptyTargets);
    }
    let space = Arc::new(matching_space_from_questions(questions, question_weights, metric)?);

    entities
        .iter()
        .enumerate()
        .map(|(entity_index, entity)| {
            let mut coordinates = Vec::with_capacity(space.dimensions());
            for q in questions {
                let normalized = q
                    .normalize_value(entity.answer_value(q.id()))
                    .map_err(|source| MatchError::InvalidAnswer {
                        entity_index,
                        source,
                    })?;
                if normalized.len() != q.normalized_dimensions() {
                    return Err(MatchError::NormalizedDimensionMismatch {
                        question_id: q.id().to_string(),
                        expected: q.normalized_dimensions(),
                        actual: normalized.len(),
                    });
                }
                coordinates.extend_from_slice(normalized.coordinates());
            }
            Ok(Position::new(coordinates, Arc::clone(&space))?)
        })
        .collect()
}

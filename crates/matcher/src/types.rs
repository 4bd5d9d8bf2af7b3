use std::collections::HashMap;
use std::fmt;

use distance::{
    DistanceError, DistanceMetric, MeasurementOptions, MissingValueOptions,
    UnsignedNormalizedDistance, EXTENT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::question::{QuestionError, Ungrouped};

/// Construction options of a [`crate::MatchingAlgorithm`].
///
/// `MatchingAlgorithmOptions` is cheap to copy and serde-friendly so it can be
/// embedded in higher-level configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchingAlgorithmOptions {
    /// Per-dimension metric.
    #[serde(default)]
    pub distance_metric: DistanceMetric,
    /// Policy for answers the target did not give.
    #[serde(default)]
    pub missing_value_options: MissingValueOptions,
    /// Measure candidates on the rayon thread pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchingAlgorithmOptions {
    pub fn new(
        distance_metric: DistanceMetric,
        missing_value_options: MissingValueOptions,
    ) -> Self {
        Self {
            distance_metric,
            missing_value_options,
            use_parallel: false,
        }
    }

    pub fn with_metric(mut self, distance_metric: DistanceMetric) -> Self {
        self.distance_metric = distance_metric;
        self
    }

    pub fn with_missing_value_options(mut self, options: MissingValueOptions) -> Self {
        self.missing_value_options = options;
        self
    }

    /// Enable or disable parallel measurement. Only worth it for large
    /// candidate sets.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn measurement_options(&self) -> MeasurementOptions {
        MeasurementOptions {
            metric: self.distance_metric,
            missing_value_options: self.missing_value_options,
        }
    }
}

/// Per-call options of [`crate::MatchingAlgorithm::match_with_options`].
#[derive(Debug)]
pub struct MatchingOptions<'a, G = Ungrouped> {
    /// Groups for which a sub-match is computed, e.g. question categories.
    /// Sub-matches are returned in the same order.
    pub question_groups: Option<&'a [G]>,
    /// Per-question weights, keyed by question id. Missing entries weigh `1`.
    pub question_weights: Option<HashMap<String, f64>>,
}

impl<G> Default for MatchingOptions<'_, G> {
    fn default() -> Self {
        Self {
            question_groups: None,
            question_weights: None,
        }
    }
}

impl<'a, G> MatchingOptions<'a, G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_question_groups(mut self, groups: &'a [G]) -> Self {
        self.question_groups = Some(groups);
        self
    }

    pub fn with_question_weights(mut self, weights: HashMap<String, f64>) -> Self {
        self.question_weights = Some(weights);
        self
    }

    pub fn with_question_weight(mut self, question_id: impl Into<String>, weight: f64) -> Self {
        self.question_weights
            .get_or_insert_with(HashMap::new)
            .insert(question_id.into(), weight);
        self
    }
}

/// How match scores are presented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreFormat {
    /// Factor applied to the match fraction before rounding.
    #[serde(default = "ScoreFormat::default_multiplier")]
    pub multiplier: f64,
    /// Suffix appended to the rounded score.
    #[serde(default = "ScoreFormat::default_unit")]
    pub unit: String,
}

impl ScoreFormat {
    pub(crate) fn default_multiplier() -> f64 {
        100.0
    }

    pub(crate) fn default_unit() -> String {
        "%".to_string()
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// `round(fraction * multiplier)`.
    pub fn score(&self, match_fraction: f64) -> i64 {
        (match_fraction * self.multiplier).round() as i64
    }

    /// The rounded score followed by the unit, e.g. `75%`.
    pub fn format(&self, match_fraction: f64) -> String {
        format!("{}{}", self.score(match_fraction), self.unit)
    }
}

impl Default for ScoreFormat {
    fn default() -> Self {
        Self {
            multiplier: Self::default_multiplier(),
            unit: Self::default_unit(),
        }
    }
}

/// Presentation values derived from a distance.
pub trait MatchScore {
    fn distance(&self) -> UnsignedNormalizedDistance;

    /// `(EXTENT - distance) / EXTENT`: `1` for a perfect match, `0` for the
    /// worst one.
    fn match_fraction(&self) -> f64 {
        (EXTENT - self.distance()) / EXTENT
    }

    /// Score under the default [`ScoreFormat`] (0 to 100).
    fn score(&self) -> i64 {
        self.score_with(&ScoreFormat::default())
    }

    fn score_with(&self, format: &ScoreFormat) -> i64 {
        format.score(self.match_fraction())
    }

    fn format_score(&self, format: &ScoreFormat) -> String {
        format.format(self.match_fraction())
    }
}

/// The result of comparing one entity against the reference.
#[derive(Debug)]
pub struct Match<'a, E, G = Ungrouped> {
    pub distance: UnsignedNormalizedDistance,
    pub entity: &'a E,
    /// One sub-match per requested question group, in request order.
    pub sub_matches: Option<Vec<SubMatch<'a, G>>>,
}

impl<'a, E, G> Match<'a, E, G> {
    pub fn new(distance: UnsignedNormalizedDistance, entity: &'a E) -> Self {
        Self {
            distance,
            entity,
            sub_matches: None,
        }
    }

    pub fn with_sub_matches(mut self, sub_matches: Vec<SubMatch<'a, G>>) -> Self {
        self.sub_matches = Some(sub_matches);
        self
    }
}

impl<E, G> Clone for Match<'_, E, G> {
    fn clone(&self) -> Self {
        Self {
            distance: self.distance,
            entity: self.entity,
            sub_matches: self.sub_matches.clone(),
        }
    }
}

impl<E, G> MatchScore for Match<'_, E, G> {
    fn distance(&self) -> UnsignedNormalizedDistance {
        self.distance
    }
}

impl<E, G> fmt::Display for Match<'_, E, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_score(&ScoreFormat::default()))
    }
}

/// A match restricted to one question group.
#[derive(Debug)]
pub struct SubMatch<'a, G> {
    pub distance: UnsignedNormalizedDistance,
    pub question_group: &'a G,
}

impl<'a, G> SubMatch<'a, G> {
    pub fn new(distance: UnsignedNormalizedDistance, question_group: &'a G) -> Self {
        Self {
            distance,
            question_group,
        }
    }
}

impl<G> Clone for SubMatch<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for SubMatch<'_, G> {}

impl<G> MatchScore for SubMatch<'_, G> {
    fn distance(&self) -> UnsignedNormalizedDistance {
        self.distance
    }
}

impl<G> fmt::Display for SubMatch<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_score(&ScoreFormat::default()))
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatchError {
    /// No questions were supplied.
    #[error("questions must not be empty")]
    EmptyQuestions,
    /// No target entities were supplied.
    #[error("target entities must not be empty")]
    EmptyTargets,
    /// Two questions share an id.
    #[error("duplicate question id: {question_id}")]
    DuplicateQuestionId { question_id: String },
    /// The reference entity answered none of the questions.
    #[error("reference entity has answered none of the {question_count} questions")]
    NoAnsweredQuestions { question_count: usize },
    /// A question rejected an entity's answer. `entity_index` 0 is the
    /// reference, `i + 1` is target `i`.
    #[error("invalid answer from entity {entity_index}: {source}")]
    InvalidAnswer {
        entity_index: usize,
        source: QuestionError,
    },
    /// A question produced a different number of coordinates than it declares.
    #[error("question {question_id} declares {expected} dimensions but produced {actual}")]
    NormalizedDimensionMismatch {
        question_id: String,
        expected: usize,
        actual: usize,
    },
    /// A projector changed the number of positions.
    #[error("projector returned {actual} positions for {expected} inputs")]
    ProjectionCountMismatch { expected: usize, actual: usize },
    /// A question weight is negative or not finite.
    #[error("invalid weight {weight} for question {question_id}")]
    InvalidQuestionWeight { question_id: String, weight: f64 },
    /// Space construction or distance measurement failed.
    #[error(transparent)]
    Distance(#[from] DistanceError),
}

//! Workspace umbrella crate for votematch.
//!
//! This crate stitches the numeric core (`distance`) and the matching
//! orchestrator (`matcher`) together with YAML configuration so callers can
//! rank candidates against a voter through a single API entry point.

pub mod config;
pub mod demo;

pub use config::{AlgorithmYamlConfig, ConfigLoadError, VoteMatchConfig};
pub use demo::{DemoElection, DemoParams};
pub use distance::{
    Coordinate, DistanceError, DistanceMetric, EXTENT, GlobalAndSubspaceDistances, MatchingSpace,
    MeasurementOptions, MissingValueBias, MissingValueMethod, MissingValueOptions, Position,
    impute_missing_values, measure_distance, measure_distance_with_subspaces,
};
pub use matcher::{
    AnswerValue, AnsweringEntity, CategoricalQuestion, FnProjector, HasAnswers, Match,
    MatchError, MatchScore, MatchableQuestion, MatchableQuestionGroup, MatchingAlgorithm,
    MatchingAlgorithmOptions, MatchingOptions, MatchingSpaceProjector, NoProjection,
    NormalizedValue, OrdinalQuestion, Question, QuestionError, QuestionGroup, ScoreFormat,
    SubMatch, Ungrouped, create_subspace, create_weighted_subspace, matching_space_from_questions,
    project_to_normalized_space,
};

use std::error::Error;
use std::fmt;
use std::path::Path;

use tracing::info;

/// Errors that can occur while running a configured matching session.
#[derive(Debug)]
pub enum VoteMatchError {
    Config(ConfigLoadError),
    Question(QuestionError),
    Match(MatchError),
}

impl fmt::Display for VoteMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteMatchError::Config(err) => write!(f, "configuration failure: {err}"),
            VoteMatchError::Question(err) => write!(f, "invalid question: {err}"),
            VoteMatchError::Match(err) => write!(f, "matching failure: {err}"),
        }
    }
}

impl Error for VoteMatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VoteMatchError::Config(err) => Some(err),
            VoteMatchError::Question(err) => Some(err),
            VoteMatchError::Match(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for VoteMatchError {
    fn from(value: ConfigLoadError) -> Self {
        VoteMatchError::Config(value)
    }
}

impl From<QuestionError> for VoteMatchError {
    fn from(value: QuestionError) -> Self {
        VoteMatchError::Question(value)
    }
}

impl From<MatchError> for VoteMatchError {
    fn from(value: MatchError) -> Self {
        VoteMatchError::Match(value)
    }
}

/// Load the configuration at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<VoteMatchConfig, VoteMatchError> {
    match path {
        Some(path) => Ok(VoteMatchConfig::from_file(path)?),
        None => Ok(VoteMatchConfig::default()),
    }
}

/// Generate the demo election and compare the Manhattan and Directional
/// metrics on it.
///
/// The missing-value policy, parallelism and score format come from `config`;
/// its metric is ignored since both metrics are reported.
pub fn run_demo(config: &VoteMatchConfig, params: DemoParams) -> Result<String, VoteMatchError> {
    let election = DemoElection::new(params)?;
    let base = config.algorithm_options();
    let manhattan = MatchingAlgorithm::new(base.with_metric(DistanceMetric::Manhattan));
    let directional = MatchingAlgorithm::new(base.with_metric(DistanceMetric::Directional));

    info!(
        config = config.name.as_deref().unwrap_or("default"),
        candidates = params.candidates,
        questions = params.questions,
        "demo_start"
    );

    let report = election.report(
        ("Manhattan", &manhattan),
        ("Directional", &directional),
        &config.score_format(),
    )?;
    Ok(report)
}

//! # votematch Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the numeric core (`distance`). It turns raw
//! answers of a reference entity (the voter) and a set of targets (candidates
//! or parties) into normalized positions, measures the distance of every
//! target to the reference and returns the targets ranked by similarity,
//! optionally with per-category sub-scores.
//!
//! ## Core Types
//!
//! - [`MatchableQuestion`]: capability of a question to normalize a raw
//!   answer. [`OrdinalQuestion`] (Likert scales and other ordered choices)
//!   and [`CategoricalQuestion`] (unordered choices) implement it, and
//!   [`Question`] holds either.
//! - [`HasAnswers`]: capability of an entity to report its raw answers.
//!   Implemented for [`AnsweringEntity`] and for string-keyed maps.
//! - [`MatchingAlgorithm`]: the orchestrator. Configured once with
//!   [`MatchingAlgorithmOptions`] (metric, missing-value policy, parallelism)
//!   and an optional [`MatchingSpaceProjector`].
//! - [`MatchingOptions`]: per-call question groups and question weights.
//! - [`Match`] / [`SubMatch`]: distance plus a borrowed entity or group.
//!   Scores are derived through [`MatchScore`] and presented with an explicit
//!   [`ScoreFormat`].
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{
//!     AnsweringEntity, MatchScore, MatchingAlgorithm, MatchingAlgorithmOptions, MatchingOptions,
//!     OrdinalQuestion, QuestionGroup,
//! };
//!
//! let questions: Vec<OrdinalQuestion> = (1..=3)
//!     .map(|i| OrdinalQuestion::from_likert(format!("q{i}"), 5).unwrap())
//!     .collect();
//! let voter = AnsweringEntity::new("voter")
//!     .with_answer("q1", 1_i64)
//!     .with_answer("q2", 5_i64)
//!     .with_answer("q3", 3_i64);
//! let parties = vec![
//!     AnsweringEntity::new("A").with_answer("q1", 1_i64).with_answer("q2", 4_i64),
//!     AnsweringEntity::new("B").with_answer("q1", 5_i64).with_answer("q2", 1_i64),
//! ];
//! let economy = vec![QuestionGroup::new("economy", questions[..2].to_vec())];
//!
//! let algorithm = MatchingAlgorithm::new(MatchingAlgorithmOptions::default());
//! let options = MatchingOptions::new().with_question_groups(&economy);
//! let matches = algorithm
//!     .match_with_options(&questions, &voter, &parties, &options)
//!     .unwrap();
//!
//! assert_eq!(matches[0].entity.name, "A");
//! for m in &matches {
//!     let sub = &m.sub_matches.as_ref().unwrap()[0];
//!     println!("{}: {} (economy {})", m.entity, m, sub);
//! }
//! assert!(matches[0].score() > matches[1].score());
//! ```
//!
//! ## Observability
//!
//! Every call to [`MatchingAlgorithm::match_with_options`] runs inside a
//! `matcher.match` tracing span and emits `match_success` or `match_failure`
//! with the elapsed time. Install a `tracing` subscriber to collect them.

pub mod engine;
pub mod entity;
pub mod projector;
pub mod question;
pub mod subspace;
pub mod types;

pub use crate::engine::{project_to_normalized_space, MatchingAlgorithm};
pub use crate::entity::{AnsweringEntity, HasAnswers};
pub use crate::projector::{FnProjector, MatchingSpaceProjector, NoProjection};
pub use crate::question::{
    AnswerValue, CategoricalQuestion, MatchableQuestion, MatchableQuestionGroup, NormalizedValue,
    OrdinalQuestion, Question, QuestionError, QuestionGroup, Ungrouped,
};
pub use crate::subspace::{create_subspace, create_weighted_subspace, matching_space_from_questions};
pub use crate::types::{
    Match, MatchError, MatchScore, MatchingAlgorithmOptions, MatchingOptions, ScoreFormat,
    SubMatch,
};

pub use distance::{
    DistanceMetric, MissingValueBias, MissingValueMethod, MissingValueOptions, EXTENT,
};

//! Question capability and the concrete question types.
//!
//! A question takes part in matching by mapping a raw answer onto one or more
//! normalized coordinates. Questions that cannot be represented on a single
//! axis (e.g. categorical questions with more than two choices) occupy several
//! dimensions, reported by [`MatchableQuestion::normalized_dimensions`].

mod categorical;
mod group;
mod ordinal;

use std::fmt;
use std::sync::Arc;

use distance::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::question::categorical::CategoricalQuestion;
pub use crate::question::group::{MatchableQuestionGroup, QuestionGroup, Ungrouped};
pub use crate::question::ordinal::OrdinalQuestion;

/// A raw answer as collected upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl AnswerValue {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            AnswerValue::Boolean(_) => "boolean",
            AnswerValue::Number(_) => "number",
            AnswerValue::Text(_) => "text",
        }
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Number(value as f64)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Boolean(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Boolean(b) => write!(f, "{b}"),
            AnswerValue::Number(n) => write!(f, "{n}"),
            AnswerValue::Text(t) => f.write_str(t),
        }
    }
}

/// The normalized form of one answer.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    Single(Coordinate),
    Multiple(Vec<Coordinate>),
}

impl NormalizedValue {
    pub fn coordinates(&self) -> &[Coordinate] {
        match self {
            NormalizedValue::Single(c) => std::slice::from_ref(c),
            NormalizedValue::Multiple(cs) => cs,
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates().len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }
}

/// Capability a question must provide to take part in matching.
pub trait MatchableQuestion {
    /// Identifier, unique within any question list given to the algorithm.
    fn id(&self) -> &str;

    /// Number of coordinates [`normalize_value`](Self::normalize_value)
    /// produces.
    fn normalized_dimensions(&self) -> usize {
        1
    }

    /// Map a raw answer onto normalized coordinates.
    ///
    /// `None` means the question was not answered and must map to
    /// [`Coordinate::Missing`] in every dimension, never to an error.
    fn normalize_value(&self, value: Option<&AnswerValue>)
        -> Result<NormalizedValue, QuestionError>;
}

impl<T: MatchableQuestion + ?Sized> MatchableQuestion for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn normalized_dimensions(&self) -> usize {
        (**self).normalized_dimensions()
    }

    fn normalize_value(
        &self,
        value: Option<&AnswerValue>,
    ) -> Result<NormalizedValue, QuestionError> {
        (**self).normalize_value(value)
    }
}

impl<T: MatchableQuestion + ?Sized> MatchableQuestion for Arc<T> {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn normalized_dimensions(&self) -> usize {
        (**self).normalized_dimensions()
    }

    fn normalize_value(
        &self,
        value: Option<&AnswerValue>,
    ) -> Result<NormalizedValue, QuestionError> {
        (**self).normalize_value(value)
    }
}

/// Any of the built-in question types, for heterogeneous question lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    Ordinal(OrdinalQuestion),
    Categorical(CategoricalQuestion),
}

impl MatchableQuestion for Question {
    fn id(&self) -> &str {
        match self {
            Question::Ordinal(q) => q.id(),
            Question::Categorical(q) => q.id(),
        }
    }

    fn normalized_dimensions(&self) -> usize {
        match self {
            Question::Ordinal(q) => q.normalized_dimensions(),
            Question::Categorical(q) => q.normalized_dimensions(),
        }
    }

    fn normalize_value(
        &self,
        value: Option<&AnswerValue>,
    ) -> Result<NormalizedValue, QuestionError> {
        match self {
            Question::Ordinal(q) => q.normalize_value(value),
            Question::Categorical(q) => q.normalize_value(value),
        }
    }
}

impl From<OrdinalQuestion> for Question {
    fn from(q: OrdinalQuestion) -> Self {
        Question::Ordinal(q)
    }
}

impl From<CategoricalQuestion> for Question {
    fn from(q: CategoricalQuestion) -> Self {
        Question::Categorical(q)
    }
}

/// Errors raised while building questions or normalizing answers.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {question_id} needs at least 2 choices, got {count}")]
    TooFewChoices { question_id: String, count: usize },

    #[error("question {question_id} has an invalid choice: {reason}")]
    InvalidChoice { question_id: String, reason: String },

    #[error("likert scale must be >= 2 (got {scale})")]
    InvalidLikertScale { scale: usize },

    #[error("value {value} for question {question_id} is outside [{min}, {max}]")]
    ValueOutOfRange {
        question_id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("question {question_id} expects a {expected} answer, got {actual}")]
    UnexpectedAnswerType {
        question_id: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("question {question_id} has no choice {choice:?}")]
    UnknownChoice { question_id: String, choice: String },
}

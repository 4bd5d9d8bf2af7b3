use distance::{Coordinate, EXTENT};

use crate::question::{AnswerValue, MatchableQuestion, NormalizedValue, QuestionError};

/// An ordinal multiple-choice question, e.g. a Likert scale.
///
/// Answers are numbers within the range spanned by the choice values and are
/// mapped linearly onto `[MIN, MAX]`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalQuestion {
    id: String,
    values: Vec<f64>,
    min_value: f64,
    max_value: f64,
}

impl OrdinalQuestion {
    /// Build a question from its choice values. Order does not matter.
    pub fn new(
        id: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self, QuestionError> {
        let id = id.into();
        let values: Vec<f64> = values.into_iter().collect();
        if values.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                question_id: id,
                count: values.len(),
            });
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(QuestionError::InvalidChoice {
                reason: format!("choice value {bad} is not finite"),
                question_id: id,
            });
        }
        let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min_value == max_value {
            return Err(QuestionError::InvalidChoice {
                reason: format!("all choices share the value {min_value}"),
                question_id: id,
            });
        }
        Ok(Self {
            id,
            values,
            min_value,
            max_value,
        })
    }

    /// A Likert question with choices `1..=scale`.
    pub fn from_likert(id: impl Into<String>, scale: usize) -> Result<Self, QuestionError> {
        if scale < 2 {
            return Err(QuestionError::InvalidLikertScale { scale });
        }
        Self::new(id, (1..=scale).map(|v| v as f64))
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    pub fn neutral_value(&self) -> f64 {
        (self.min_value + self.max_value) / 2.0
    }
}

impl MatchableQuestion for OrdinalQuestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn normalize_value(
        &self,
        value: Option<&AnswerValue>,
    ) -> Result<NormalizedValue, QuestionError> {
        let raw = match value {
            None => return Ok(NormalizedValue::Single(Coordinate::Missing)),
            Some(AnswerValue::Number(n)) => *n,
            Some(other) => {
                return Err(QuestionError::UnexpectedAnswerType {
                    question_id: self.id.clone(),
                    expected: "number",
                    actual: other.kind(),
                })
            }
        };
        if !(raw >= self.min_value && raw <= self.max_value) {
            return Err(QuestionError::ValueOutOfRange {
                question_id: self.id.clone(),
                value: raw,
                min: self.min_value,
                max: self.max_value,
            });
        }
        let relative = (raw - self.min_value) / (self.max_value - self.min_value);
        Ok(NormalizedValue::Single(Coordinate::Value(
            EXTENT * (relative - 0.5),
        )))
    }
}

use std::collections::HashSet;

use distance::{Coordinate, MAX, MIN};

use crate::question::{AnswerValue, MatchableQuestion, NormalizedValue, QuestionError};

/// A multiple-choice question whose choices cannot be ordered.
///
/// The question is modelled as one binary choice per option ("is this option
/// the favourite?"), except for two-option questions, which need a single
/// dimension. As a consequence a disagreement on an `n`-choice question
/// (`n > 2`) contributes only `2 / n` of the full distance: the two answers
/// differ on two of the `n` binary choices and agree on the rest. Raising the
/// question weight to `n / 2` compensates for this when it is not wanted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalQuestion {
    id: String,
    choices: Vec<String>,
}

impl CategoricalQuestion {
    /// Build a question from its choice ids. Ids must be unique and non-empty.
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        choices: impl IntoIterator<Item = S>,
    ) -> Result<Self, QuestionError> {
        let id = id.into();
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        if choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                question_id: id,
                count: choices.len(),
            });
        }
        let mut seen = HashSet::with_capacity(choices.len());
        for choice in &choices {
            if choice.is_empty() {
                return Err(QuestionError::InvalidChoice {
                    question_id: id,
                    reason: "choice id must not be empty".into(),
                });
            }
            if !seen.insert(choice.as_str()) {
                return Err(QuestionError::InvalidChoice {
                    reason: format!("duplicate choice id {choice:?}"),
                    question_id: id,
                });
            }
        }
        Ok(Self { id, choices })
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    fn is_binary(&self) -> bool {
        self.choices.len() == 2
    }
}

impl MatchableQuestion for CategoricalQuestion {
    fn id(&self) -> &str {
        &self.id
    }

    fn normalized_dimensions(&self) -> usize {
        if self.is_binary() {
            1
        } else {
            self.choices.len()
        }
    }

    fn normalize_value(
        &self,
        value: Option<&AnswerValue>,
    ) -> Result<NormalizedValue, QuestionError> {
        let choice = match value {
            None if self.is_binary() => return Ok(NormalizedValue::Single(Coordinate::Missing)),
            None => {
                return Ok(NormalizedValue::Multiple(vec![
                    Coordinate::Missing;
                    self.choices.len()
                ]))
            }
            Some(AnswerValue::Text(choice)) => choice,
            Some(other) => {
                return Err(QuestionError::UnexpectedAnswerType {
                    question_id: self.id.clone(),
                    expected: "text",
                    actual: other.kind(),
                })
            }
        };
        let selected = self
            .choices
            .iter()
            .position(|c| c == choice)
            .ok_or_else(|| QuestionError::UnknownChoice {
                question_id: self.id.clone(),
                choice: choice.clone(),
            })?;

        if self.is_binary() {
            let c = if selected == 0 { MIN } else { MAX };
            return Ok(NormalizedValue::Single(Coordinate::Value(c)));
        }
        Ok(NormalizedValue::Multiple(
            (0..self.choices.len())
                .map(|i| Coordinate::Value(if i == selected { MAX } else { MIN }))
                .collect(),
        ))
    }
}

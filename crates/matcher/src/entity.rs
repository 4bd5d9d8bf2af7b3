//! Entities that carry answers: the voter and the candidates or parties.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::question::AnswerValue;

/// Capability an entity must provide to be matched.
pub trait HasAnswers {
    /// The raw answer to `question_id`, or `None` when it was not answered.
    fn answer_value(&self, question_id: &str) -> Option<&AnswerValue>;
}

impl<T: HasAnswers + ?Sized> HasAnswers for &T {
    fn answer_value(&self, question_id: &str) -> Option<&AnswerValue> {
        (**self).answer_value(question_id)
    }
}

impl HasAnswers for HashMap<String, AnswerValue> {
    fn answer_value(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id)
    }
}

impl HasAnswers for BTreeMap<String, AnswerValue> {
    fn answer_value(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id)
    }
}

/// A named entity with an answer map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnsweringEntity {
    pub name: String,
    #[serde(default)]
    pub answers: BTreeMap<String, AnswerValue>,
}

impl AnsweringEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            answers: BTreeMap::new(),
        }
    }

    pub fn with_answer(
        mut self,
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Self {
        self.set_answer(question_id, value);
        self
    }

    pub fn set_answer(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(question_id.into(), value.into());
    }

    pub fn clear_answer(&mut self, question_id: &str) -> Option<AnswerValue> {
        self.answers.remove(question_id)
    }
}

impl HasAnswers for AnsweringEntity {
    fn answer_value(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }
}

impl fmt::Display for AnsweringEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

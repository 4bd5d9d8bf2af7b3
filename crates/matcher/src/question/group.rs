use crate::question::{MatchableQuestion, OrdinalQuestion};

/// A labelled subset of questions, e.g. a question category, for which a
/// separate sub-score is computed.
pub trait MatchableQuestionGroup {
    type Question: MatchableQuestion;

    fn matchable_questions(&self) -> &[Self::Question];

    fn label(&self) -> &str;
}

/// Plain owned question group.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionGroup<Q> {
    pub label: String,
    pub questions: Vec<Q>,
}

impl<Q> QuestionGroup<Q> {
    pub fn new(label: impl Into<String>, questions: Vec<Q>) -> Self {
        Self {
            label: label.into(),
            questions,
        }
    }
}

impl<Q: MatchableQuestion> MatchableQuestionGroup for QuestionGroup<Q> {
    type Question = Q;

    fn matchable_questions(&self) -> &[Q] {
        &self.questions
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Group type for matches computed without sub-groups. It has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ungrouped {}

impl MatchableQuestionGroup for Ungrouped {
    type Question = OrdinalQuestion;

    fn matchable_questions(&self) -> &[OrdinalQuestion] {
        match *self {}
    }

    fn label(&self) -> &str {
        match *self {}
    }
}

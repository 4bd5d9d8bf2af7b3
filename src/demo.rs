//! A small synthetic election used by the demo binary, the benches and the
//! integration tests.

use matcher::{
    AnsweringEntity, Match, MatchError, MatchScore, MatchableQuestion, MatchingAlgorithm,
    MatchingOptions, OrdinalQuestion, QuestionError, QuestionGroup, ScoreFormat,
};
use serde::{Deserialize, Serialize};

/// Shape of the generated election.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoParams {
    pub candidates: usize,
    pub questions: usize,
    pub likert_scale: usize,
    /// The voter gives this answer to every question.
    pub voter_answer: usize,
    /// Every candidate leaves this many leading questions unanswered.
    pub missing: usize,
    /// Size of the sub-group made of the leading questions; `0` for none.
    pub sub_group: usize,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            candidates: 5,
            questions: 5,
            likert_scale: 5,
            voter_answer: 2,
            missing: 1,
            sub_group: 0,
        }
    }
}

/// Questions, voter and candidates of a synthetic election.
#[derive(Debug, Clone)]
pub struct DemoElection {
    pub params: DemoParams,
    pub questions: Vec<OrdinalQuestion>,
    pub voter: AnsweringEntity,
    pub candidates: Vec<AnsweringEntity>,
    pub groups: Vec<QuestionGroup<OrdinalQuestion>>,
}

impl DemoElection {
    /// Candidate `i` answers `(i % scale) + 1` to every question it answers.
    pub fn new(params: DemoParams) -> Result<Self, QuestionError> {
        let questions = (0..params.questions)
            .map(|i| OrdinalQuestion::from_likert(format!("q{i}"), params.likert_scale))
            .collect::<Result<Vec<_>, _>>()?;

        let mut voter = AnsweringEntity::new("Voter");
        for q in &questions {
            voter.set_answer(q.id(), params.voter_answer as f64);
        }

        let candidates = (0..params.candidates)
            .map(|i| {
                let value = (i % params.likert_scale.max(1) + 1) as f64;
                let mut candidate = AnsweringEntity::new(format!("Candidate {i}"));
                for q in questions.iter().skip(params.missing) {
                    candidate.set_answer(q.id(), value);
                }
                candidate
            })
            .collect();

        let groups = if params.sub_group > 0 {
            let end = params.sub_group.min(questions.len());
            vec![QuestionGroup::new(
                format!("Questions 1 to {end}"),
                questions[..end].to_vec(),
            )]
        } else {
            Vec::new()
        };

        Ok(Self {
            params,
            questions,
            voter,
            candidates,
            groups,
        })
    }

    /// Match the candidates against the voter.
    pub fn run<'a>(
        &'a self,
        algorithm: &MatchingAlgorithm,
    ) -> Result<Vec<Match<'a, AnsweringEntity, QuestionGroup<OrdinalQuestion>>>, MatchError> {
        let mut options = MatchingOptions::new();
        if !self.groups.is_empty() {
            options = options.with_question_groups(&self.groups);
        }
        algorithm.match_with_options(&self.questions, &self.voter, &self.candidates, &options)
    }

    /// Human-readable comparison of two algorithms, one line per candidate
    /// in the ranking of `first`.
    pub fn report(
        &self,
        first: (&str, &MatchingAlgorithm),
        second: (&str, &MatchingAlgorithm),
        format: &ScoreFormat,
    ) -> Result<String, MatchError> {
        let first_matches = self.run(first.1)?;
        let second_matches = self.run(second.1)?;

        let mut out = format!(
            "Questions: {} • Likert scale {}\nThe voter answers {} to all\n",
            self.params.questions, self.params.likert_scale, self.params.voter_answer
        );

        for m in &first_matches {
            let other = second_matches
                .iter()
                .find(|o| std::ptr::eq(o.entity, m.entity));
            let other_score = other.map_or_else(|| "-".to_string(), |o| score_of(o, format));
            out.push_str(&format!(
                "{} • Matches: {} {} • {} {}\n",
                m.entity,
                first.0,
                score_of(m, format),
                second.0,
                other_score,
            ));
            let first_sub = m.sub_matches.as_deref().and_then(<[_]>::first);
            let second_sub = other
                .and_then(|o| o.sub_matches.as_deref())
                .and_then(<[_]>::first);
            if let (Some(a), Some(b)) = (first_sub, second_sub) {
                out.push_str(&format!(
                    "  Submatches {}: {} {} • {} {}\n",
                    a.question_group.label,
                    first.0,
                    format.format(a.match_fraction()),
                    second.0,
                    format.format(b.match_fraction()),
                ));
            }
        }
        Ok(out)
    }
}

fn score_of<E, G>(m: &Match<'_, E, G>, format: &ScoreFormat) -> String {
    format.format(m.match_fraction())
}

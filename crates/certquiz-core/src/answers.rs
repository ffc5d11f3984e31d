//! # Answer Record
//!
//! Selected options per stage and question: `stage -> question index -> option`.
//!
//! Entries are write-once. A second answer for the same question is refused,
//! so the first submission always wins. The only way to forget answers is
//! [`AnswerRecord::clear_stage`] (a new attempt) or dropping the record.

use crate::catalog::Stage;
use crate::StageId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Write-once answer storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerRecord(BTreeMap<StageId, BTreeMap<usize, usize>>);

impl AnswerRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer unless one already exists.
    ///
    /// Returns `true` if the answer was stored.
    pub fn record(&mut self, stage: StageId, question: usize, option: usize) -> bool {
        let answers = self.0.entry(stage).or_default();
        if answers.contains_key(&question) {
            return false;
        }
        answers.insert(question, option);
        true
    }

    /// Get the selected option for a question.
    #[must_use]
    pub fn get(&self, stage: StageId, question: usize) -> Option<usize> {
        self.0.get(&stage).and_then(|a| a.get(&question)).copied()
    }

    /// Check whether a question has been answered.
    #[must_use]
    pub fn is_answered(&self, stage: StageId, question: usize) -> bool {
        self.get(stage, question).is_some()
    }

    /// Number of answered questions in a stage.
    #[must_use]
    pub fn answered_count(&self, stage: StageId) -> usize {
        self.0.get(&stage).map_or(0, BTreeMap::len)
    }

    /// `(question, option)` pairs of a stage in question order.
    pub fn stage_answers(&self, stage: StageId) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0
            .get(&stage)
            .into_iter()
            .flat_map(|a| a.iter().map(|(q, o)| (*q, *o)))
    }

    /// Forget every answer of a stage.
    pub fn clear_stage(&mut self, stage: StageId) {
        self.0.remove(&stage);
    }

    /// Check whether no answer is stored at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeMap::is_empty)
    }

    /// Count recorded answers that match the correct option.
    ///
    /// Unanswered questions count as incorrect. Answers recorded against
    /// indexes the stage does not have are ignored.
    #[must_use]
    pub fn score(&self, stage: &Stage) -> u32 {
        let correct = self
            .stage_answers(stage.id)
            .filter(|(q, o)| stage.question(*q).is_some_and(|question| question.is_correct(*o)))
            .count();
        u32::try_from(correct).unwrap_or(u32::MAX)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Question;

    fn stage() -> Stage {
        let q = |id: u32, correct: usize| Question {
            id,
            prompt: String::new(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct,
            explanation: String::new(),
        };
        Stage {
            id: StageId(1),
            title: String::new(),
            subtitle: None,
            description: None,
            icon: None,
            passing_score: 2,
            questions: vec![q(1, 0), q(2, 1), q(3, 2)],
        }
    }

    #[test]
    fn first_answer_wins() {
        let mut record = AnswerRecord::new();
        assert!(record.record(StageId(1), 0, 2));
        assert!(!record.record(StageId(1), 0, 1));
        assert_eq!(record.get(StageId(1), 0), Some(2));
    }

    #[test]
    fn stages_are_independent() {
        let mut record = AnswerRecord::new();
        record.record(StageId(1), 0, 1);
        record.record(StageId(2), 0, 0);

        assert_eq!(record.answered_count(StageId(1)), 1);
        record.clear_stage(StageId(1));
        assert_eq!(record.answered_count(StageId(1)), 0);
        assert!(record.is_answered(StageId(2), 0));
        assert!(!record.is_empty());
    }

    #[test]
    fn score_counts_matches_only() {
        let stage = stage();
        let mut record = AnswerRecord::new();
        assert_eq!(record.score(&stage), 0);

        record.record(StageId(1), 0, 0); // correct
        record.record(StageId(1), 1, 2); // wrong
        assert_eq!(record.score(&stage), 1);

        record.record(StageId(1), 2, 2); // correct
        assert_eq!(record.score(&stage), 2);
    }

    #[test]
    fn score_ignores_foreign_indexes() {
        let stage = stage();
        let mut record = AnswerRecord::new();
        record.record(StageId(1), 9, 0);
        record.record(StageId(2), 0, 0);
        assert_eq!(record.score(&stage), 0);
    }

    #[test]
    fn stage_answers_in_question_order() {
        let mut record = AnswerRecord::new();
        record.record(StageId(1), 2, 0);
        record.record(StageId(1), 0, 1);
        let pairs: Vec<_> = record.stage_answers(StageId(1)).collect();
        assert_eq!(pairs, vec![(0, 1), (2, 0)]);
    }
}

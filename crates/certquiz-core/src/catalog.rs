//! # Question Catalog
//!
//! The read-only content the controller runs on: ordered stages, each with
//! ordered questions and a passing score, plus the rank table.
//!
//! A [`Catalog`] can only be obtained through validation ([`Catalog::new`] or
//! deserialization, which routes through the same checks). Code holding a
//! `Catalog` may therefore index stages and questions without re-checking
//! bounds on catalog content.
//!
//! Validation rules:
//! - at least one stage
//! - stage ids are `1..=N` in order
//! - every stage has at least one question
//! - question ids are unique within their stage
//! - every question has `MIN_OPTIONS..=MAX_OPTIONS` options
//! - the correct answer indexes an option
//! - `passing_score <= question count`

use crate::primitives::{MAX_OPTIONS, MIN_OPTIONS};
use crate::rank::RankTable;
use crate::{CatalogError, StageId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// QUESTION
// =============================================================================

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    /// Prompt text.
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
}

impl Question {
    /// Check whether `option` is the correct one.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    /// Check whether `option` names one of the options.
    #[must_use]
    pub fn has_option(&self, option: usize) -> bool {
        option < self.options.len()
    }
}

// =============================================================================
// STAGE
// =============================================================================

/// A gated group of questions with its own pass threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub passing_score: u32,
    pub questions: Vec<Question>,
}

impl Stage {
    /// Number of questions in the stage.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Get a question by zero-based index.
    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Check whether `index` is the last question.
    #[must_use]
    pub fn is_last(&self, index: usize) -> bool {
        index.saturating_add(1) == self.questions.len()
    }

    /// Question count as `u32` (saturating).
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::EmptyStage(self.id));
        }

        if self.passing_score as usize > self.questions.len() {
            return Err(CatalogError::PassingScoreOutOfRange {
                stage: self.id,
                passing_score: self.passing_score,
                question_count: self.questions.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for (index, question) in self.questions.iter().enumerate() {
            if !seen.insert(question.id) {
                return Err(CatalogError::DuplicateQuestionId {
                    stage: self.id,
                    question_id: question.id,
                });
            }

            let count = question.options.len();
            if count < MIN_OPTIONS {
                return Err(CatalogError::TooFewOptions {
                    stage: self.id,
                    question: index,
                    count,
                    min: MIN_OPTIONS,
                });
            }
            if count > MAX_OPTIONS {
                return Err(CatalogError::TooManyOptions {
                    stage: self.id,
                    question: index,
                    count,
                    max: MAX_OPTIONS,
                });
            }
            if !question.has_option(question.correct_answer) {
                return Err(CatalogError::CorrectAnswerOutOfRange {
                    stage: self.id,
                    question: index,
                    correct: question.correct_answer,
                    count,
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Unvalidated catalog document as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogDocument {
    pub(crate) stages: Vec<Stage>,
    pub(crate) ranks: RankTable,
}

/// Validated, immutable question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    stages: Vec<Stage>,
    ranks: RankTable,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(doc.stages, doc.ranks)
    }
}

impl Catalog {
    /// Validate and build a catalog.
    pub fn new(stages: Vec<Stage>, ranks: RankTable) -> Result<Self, CatalogError> {
        if stages.is_empty() {
            return Err(CatalogError::NoStages);
        }

        for (position, stage) in stages.iter().enumerate() {
            let expected = StageId(position as u32 + 1);
            if stage.id != expected {
                return Err(CatalogError::NonContiguousStageId {
                    position,
                    expected,
                    found: stage.id,
                });
            }
            stage.validate()?;
        }

        Ok(Self { stages, ranks })
    }

    /// All stages in order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Get a stage by id.
    #[must_use]
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        id.position().and_then(|p| self.stages.get(p))
    }

    /// Check whether the id names a stage of this catalog.
    #[must_use]
    pub fn contains(&self, id: StageId) -> bool {
        self.stage(id).is_some()
    }

    /// Number of stages.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Id of the last stage.
    #[must_use]
    pub fn last_stage(&self) -> StageId {
        StageId(self.stages.len() as u32)
    }

    /// Total number of questions across all stages.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.stages.iter().map(Stage::question_count).sum()
    }

    /// Stage ids in order.
    pub fn stage_ids(&self) -> impl Iterator<Item = StageId> + '_ {
        self.stages.iter().map(|s| s.id)
    }

    /// The rank table.
    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::RankInfo;

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id,
            prompt: format!("Question {id}"),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn stage(id: u32, questions: Vec<Question>, passing_score: u32) -> Stage {
        Stage {
            id: StageId(id),
            title: format!("Stage {id}"),
            subtitle: None,
            description: None,
            icon: None,
            passing_score,
            questions,
        }
    }

    fn ranks() -> RankTable {
        let info = |t: &str| RankInfo {
            title: t.to_string(),
            description: String::new(),
            icon: String::new(),
            razryad: None,
        };
        RankTable {
            master: info("master"),
            high: info("high"),
            medium: info("medium"),
            low: info("low"),
        }
    }

    #[test]
    fn valid_catalog_accepted() {
        let catalog = Catalog::new(
            vec![
                stage(1, vec![question(1, 0), question(2, 1)], 2),
                stage(2, vec![question(1, 2)], 0),
            ],
            ranks(),
        )
        .expect("valid");

        assert_eq!(catalog.stage_count(), 2);
        assert_eq!(catalog.question_count(), 3);
        assert_eq!(catalog.last_stage(), StageId(2));
        assert!(catalog.contains(StageId(2)));
        assert!(!catalog.contains(StageId(3)));
        assert!(!catalog.contains(StageId(0)));
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = Catalog::new(vec![], ranks()).expect_err("no stages");
        assert_eq!(err, CatalogError::NoStages);
    }

    #[test]
    fn gap_in_stage_ids_rejected() {
        let err = Catalog::new(
            vec![
                stage(1, vec![question(1, 0)], 1),
                stage(3, vec![question(1, 0)], 1),
            ],
            ranks(),
        )
        .expect_err("gap");

        assert_eq!(
            err,
            CatalogError::NonContiguousStageId {
                position: 1,
                expected: StageId(2),
                found: StageId(3),
            }
        );
    }

    #[test]
    fn empty_stage_rejected() {
        let err = Catalog::new(vec![stage(1, vec![], 0)], ranks()).expect_err("empty");
        assert_eq!(err, CatalogError::EmptyStage(StageId(1)));
    }

    #[test]
    fn passing_score_above_count_rejected() {
        let err =
            Catalog::new(vec![stage(1, vec![question(1, 0)], 2)], ranks()).expect_err("passing");
        assert!(matches!(err, CatalogError::PassingScoreOutOfRange { .. }));
    }

    #[test]
    fn correct_answer_out_of_range_rejected() {
        let err =
            Catalog::new(vec![stage(1, vec![question(1, 3)], 1)], ranks()).expect_err("range");
        assert!(matches!(
            err,
            CatalogError::CorrectAnswerOutOfRange {
                correct: 3,
                count: 3,
                ..
            }
        ));
    }

    #[test]
    fn single_option_rejected() {
        let mut q = question(1, 0);
        q.options.truncate(1);
        let err = Catalog::new(vec![stage(1, vec![q], 1)], ranks()).expect_err("options");
        assert!(matches!(err, CatalogError::TooFewOptions { count: 1, .. }));
    }

    #[test]
    fn too_many_options_rejected() {
        let mut q = question(1, 0);
        q.options = (0..27).map(|i| i.to_string()).collect();
        let err = Catalog::new(vec![stage(1, vec![q], 1)], ranks()).expect_err("options");
        assert!(matches!(err, CatalogError::TooManyOptions { count: 27, .. }));
    }

    #[test]
    fn duplicate_question_id_rejected() {
        let err = Catalog::new(
            vec![stage(1, vec![question(7, 0), question(7, 1)], 1)],
            ranks(),
        )
        .expect_err("duplicate");
        assert_eq!(
            err,
            CatalogError::DuplicateQuestionId {
                stage: StageId(1),
                question_id: 7,
            }
        );
    }

    #[test]
    fn stage_question_helpers() {
        let s = stage(1, vec![question(1, 0), question(2, 1)], 1);
        assert!(!s.is_last(0));
        assert!(s.is_last(1));
        assert_eq!(s.total(), 2);
        assert!(s.question(2).is_none());
        assert!(s.questions[1].is_correct(1));
        assert!(!s.questions[1].has_option(3));
    }
}

//! # View Models
//!
//! Read-only projections of the controller state for a presentation layer.
//!
//! Everything here is derived on demand from [`QuizController`]; nothing is
//! stored. A presentation layer (terminal, HTTP client) renders these and
//! never recomputes scores or highlight rules itself.

use crate::controller::{QuizController, QuizState};
use crate::primitives::option_letter;
use crate::rank::RankInfo;
use crate::{Screen, StageEnd, StageId, StageResult, Tier};
use serde::{Deserialize, Serialize};

// =============================================================================
// STAGE SELECTION
// =============================================================================

/// One entry of the stage selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCard {
    pub id: StageId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub question_count: usize,
    pub passing_score: u32,
    pub unlocked: bool,
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<StageResult>,
}

// =============================================================================
// QUESTION
// =============================================================================

/// Highlight of an option.
///
/// Everything is `Neutral` until the explanation is visible; then the correct
/// option is `Correct`, a wrongly selected option is `Incorrect` and the rest
/// are `Dimmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
    Dimmed,
}

/// One answer option as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
    pub state: OptionState,
}

/// The active question as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub stage_id: StageId,
    pub stage_title: String,
    pub stage_count: usize,
    /// Zero-based question index.
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
    /// Whether the selection was right; only set once the explanation shows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub is_last: bool,
    /// Correct answers so far in this stage.
    pub score: u32,
}

impl QuestionView {
    /// One-based question number.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index.saturating_add(1)
    }

    /// Whether the user may pick an option.
    #[must_use]
    pub fn accepts_answer(&self) -> bool {
        self.selected.is_none()
    }
}

// =============================================================================
// FINAL REPORT
// =============================================================================

/// Per-stage line of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub id: StageId,
    pub title: String,
    pub result: StageResult,
}

/// Aggregate outcome over all stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalReport {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub tier: Tier,
    pub rank: RankInfo,
    pub all_passed: bool,
    pub stages: Vec<StageSummary>,
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Full state plus the derived aggregates, as a presentation layer polls it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub current_score: u32,
    pub aggregate_score: u32,
    pub aggregate_total: u32,
    pub aggregate_percentage: u32,
    pub all_stages_completed: bool,
    pub all_stages_passed: bool,
}

impl QuizSnapshot {
    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// Pending interstitial payload.
    #[must_use]
    pub fn stage_end(&self) -> Option<&StageEnd> {
        self.state.stage_end.as_ref()
    }
}

// =============================================================================
// DERIVATIONS
// =============================================================================

impl QuizController {
    /// Cards for the stage selection screen, in catalog order.
    #[must_use]
    pub fn stage_cards(&self) -> Vec<StageCard> {
        let current = self.current_stage_id();
        self.catalog()
            .stages()
            .iter()
            .map(|stage| StageCard {
                id: stage.id,
                title: stage.title.clone(),
                subtitle: stage.subtitle.clone(),
                description: stage.description.clone(),
                icon: stage.icon.clone(),
                question_count: stage.question_count(),
                passing_score: stage.passing_score,
                unlocked: self.is_unlocked(stage.id),
                is_current: stage.id == current,
                result: self.stage_result(stage.id).copied(),
            })
            .collect()
    }

    /// The active question, while on the question screen.
    #[must_use]
    pub fn question_view(&self) -> Option<QuestionView> {
        if self.screen() != Screen::Question {
            return None;
        }

        let stage = self.current_stage()?;
        let index = self.current_question_index();
        let question = stage.question(index)?;
        let selected = self.answer(stage.id, index);
        let revealed = self.explanation_visible();

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let is_selected = selected == Some(i);
                let state = if !revealed {
                    OptionState::Neutral
                } else if question.is_correct(i) {
                    OptionState::Correct
                } else if is_selected {
                    OptionState::Incorrect
                } else {
                    OptionState::Dimmed
                };
                OptionView {
                    index: i,
                    letter: option_letter(i).unwrap_or('?'),
                    text: text.clone(),
                    selected: is_selected,
                    state,
                }
            })
            .collect();

        Some(QuestionView {
            stage_id: stage.id,
            stage_title: stage.title.clone(),
            stage_count: self.catalog().stage_count(),
            index,
            total: stage.question_count(),
            prompt: question.prompt.clone(),
            options,
            selected,
            correct: selected
                .filter(|_| revealed)
                .map(|s| question.is_correct(s)),
            explanation: revealed.then(|| question.explanation.clone()),
            is_last: stage.is_last(index),
            score: self.current_score(),
        })
    }

    /// The aggregate report, once every stage has a result.
    #[must_use]
    pub fn final_report(&self) -> Option<FinalReport> {
        if !self.all_stages_completed() {
            return None;
        }

        let stages = self
            .catalog()
            .stages()
            .iter()
            .filter_map(|stage| {
                self.stage_result(stage.id).map(|result| StageSummary {
                    id: stage.id,
                    title: stage.title.clone(),
                    result: *result,
                })
            })
            .collect();

        let (tier, rank) = self.rank();
        Some(FinalReport {
            score: self.aggregate_score(),
            total: self.aggregate_total(),
            percentage: self.aggregate_percentage(),
            tier,
            rank: rank.clone(),
            all_passed: self.all_stages_passed(),
            stages,
        })
    }

    /// Serializable state plus aggregates.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            state: self.state().clone(),
            current_score: self.current_score(),
            aggregate_score: self.aggregate_score(),
            aggregate_total: self.aggregate_total(),
            aggregate_percentage: self.aggregate_percentage(),
            all_stages_completed: self.all_stages_completed(),
            all_stages_passed: self.all_stages_passed(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

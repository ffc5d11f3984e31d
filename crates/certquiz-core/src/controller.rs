//! # Quiz Controller
//!
//! The progression state machine: stage gating, answer recording, scoring,
//! pass evaluation and screen transitions.
//!
//! ```text
//! landing -> stage-select -> question -> stage-result -> { stage-select | final-result }
//!                               ^  |
//!                               +--+ advance (mid-stage)
//! final-result -> landing (reset) | stage-select
//! any -> landing (reset)
//! ```
//!
//! ## Command Semantics
//!
//! Commands are synchronous and total. A command whose precondition does not
//! hold (locked stage, duplicate answer, out-of-range index, ...) changes
//! nothing; it returns `false` / [`Advance::Ignored`] and emits a `debug`
//! event. These are caller-contract violations, not errors: the presentation
//! layer is expected to prevent them.
//!
//! ## Derived Values
//!
//! The live stage score is recomputed from the answer record on every query;
//! there is no stored counter that could drift from the answers.

use crate::answers::AnswerRecord;
use crate::catalog::{Catalog, Question, Stage};
use crate::rank::{self, RankInfo};
use crate::{Screen, StageEnd, StageId, StageResult, Tier};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

// =============================================================================
// STATE
// =============================================================================

/// Everything the controller remembers about a session.
///
/// Owned exclusively by [`QuizController`]; the presentation layer reads it
/// through [`QuizController::state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    pub screen: Screen,
    pub current_stage: StageId,
    pub current_question: usize,
    pub unlocked: BTreeSet<StageId>,
    pub answers: AnswerRecord,
    pub results: BTreeMap<StageId, StageResult>,
    pub explanation_visible: bool,
    /// Interstitial payload between the last `advance` of a stage and its
    /// acknowledgement.
    pub stage_end: Option<StageEnd>,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            current_stage: StageId::FIRST,
            current_question: 0,
            unlocked: BTreeSet::from([StageId::FIRST]),
            answers: AnswerRecord::new(),
            results: BTreeMap::new(),
            explanation_visible: false,
            stage_end: None,
        }
    }
}

/// Outcome of [`QuizController::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Advance {
    /// Moved to the next question of the stage.
    Moved { index: usize },
    /// The last question was advanced; the stage has been scored.
    StageEnded(StageEnd),
    /// Preconditions did not hold; nothing changed.
    Ignored,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// In-memory quiz progression state machine.
#[derive(Debug, Clone)]
pub struct QuizController {
    catalog: Arc<Catalog>,
    state: QuizState,
}

impl QuizController {
    /// Create a controller in its initial state.
    #[must_use]
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            state: QuizState::default(),
        }
    }

    /// The catalog this controller runs on.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog.
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Full controller state.
    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Change the screen.
    ///
    /// The final screen is refused until every stage has a result. Leaving
    /// the question flow does not clear answers.
    pub fn navigate_to(&mut self, screen: Screen) -> bool {
        if screen == Screen::FinalResult && !self.all_stages_completed() {
            tracing::debug!(
                completed = self.state.results.len(),
                stages = self.catalog.stage_count(),
                "navigate_to ignored: not every stage has a result"
            );
            return false;
        }

        self.state.screen = screen;
        true
    }

    /// Start an attempt at an unlocked stage.
    ///
    /// Resets the question cursor, hides the explanation, drops any pending
    /// interstitial and forgets answers from a previous attempt of the same
    /// stage. Stored results are kept until the new attempt completes.
    pub fn begin_stage(&mut self, stage_id: StageId) -> bool {
        if !self.catalog.contains(stage_id) {
            tracing::debug!(stage = %stage_id, "begin_stage ignored: unknown stage");
            return false;
        }
        if !self.is_unlocked(stage_id) {
            tracing::debug!(stage = %stage_id, "begin_stage ignored: stage is locked");
            return false;
        }

        self.state.current_stage = stage_id;
        self.state.current_question = 0;
        self.state.explanation_visible = false;
        self.state.stage_end = None;
        self.state.answers.clear_stage(stage_id);
        self.state.screen = Screen::Question;

        tracing::debug!(stage = %stage_id, "stage attempt started");
        true
    }

    /// Leave the active stage without touching answers or results.
    pub fn end_stage_session(&mut self) {
        self.state.explanation_visible = false;
        self.state.stage_end = None;
        if self.state.screen.in_stage_flow() {
            self.state.screen = Screen::StageSelect;
        }
    }

    /// Record the selected option for a question.
    ///
    /// Ignored for unknown or locked stages, out-of-range indexes and
    /// questions that already have an answer. When the answer is for the
    /// question on screen, its explanation becomes visible.
    pub fn record_answer(
        &mut self,
        stage_id: StageId,
        question_index: usize,
        option_index: usize,
    ) -> bool {
        let Some(stage) = self.catalog.stage(stage_id) else {
            tracing::debug!(stage = %stage_id, "record_answer ignored: unknown stage");
            return false;
        };
        if !self.state.unlocked.contains(&stage_id) {
            tracing::debug!(stage = %stage_id, "record_answer ignored: stage is locked");
            return false;
        }
        let Some(question) = stage.question(question_index) else {
            tracing::debug!(
                stage = %stage_id,
                question = question_index,
                "record_answer ignored: question out of range"
            );
            return false;
        };
        if !question.has_option(option_index) {
            tracing::debug!(
                stage = %stage_id,
                question = question_index,
                option = option_index,
                "record_answer ignored: option out of range"
            );
            return false;
        }
        if !self.state.answers.record(stage_id, question_index, option_index) {
            tracing::debug!(
                stage = %stage_id,
                question = question_index,
                "record_answer ignored: already answered"
            );
            return false;
        }

        if self.is_active_question(stage_id, question_index) {
            self.state.explanation_visible = true;
        }
        true
    }

    /// Move past the current question.
    ///
    /// Requires the question screen, an answered current question and no
    /// pending interstitial. On the last question the stage is scored, its
    /// result stored (overwriting a previous attempt) and the next stage
    /// unlocked if the stage was passed. The screen is left unchanged; the
    /// caller decides whether to show the interstitial.
    pub fn advance(&mut self) -> Advance {
        if self.state.screen != Screen::Question {
            tracing::debug!(screen = %self.state.screen, "advance ignored: not on a question");
            return Advance::Ignored;
        }
        if self.state.stage_end.is_some() {
            tracing::debug!("advance ignored: stage already ended");
            return Advance::Ignored;
        }

        let stage_id = self.state.current_stage;
        let index = self.state.current_question;
        let Some(stage) = self.catalog.stage(stage_id) else {
            return Advance::Ignored;
        };
        if !self.state.answers.is_answered(stage_id, index) {
            tracing::debug!(
                stage = %stage_id,
                question = index,
                "advance ignored: current question unanswered"
            );
            return Advance::Ignored;
        }

        if !stage.is_last(index) {
            let next = index.saturating_add(1);
            self.state.current_question = next;
            // An answer recorded ahead of time is revealed on arrival.
            self.state.explanation_visible = self.state.answers.is_answered(stage_id, next);
            return Advance::Moved { index: next };
        }

        let end = self.complete_stage(stage_id);
        Advance::StageEnded(end)
    }

    /// Dismiss the stage interstitial.
    ///
    /// Applies only when a stage has just ended or the interstitial is on
    /// screen; mid-stage it is a no-op. Goes to the final screen when every
    /// stage has a result (including the one just finished), otherwise back
    /// to stage selection. Returns the screen reached.
    pub fn acknowledge_stage_end(&mut self) -> Screen {
        if self.state.stage_end.is_none() && self.state.screen != Screen::StageResult {
            tracing::debug!(screen = %self.state.screen, "acknowledge_stage_end ignored: no stage ended");
            return self.state.screen;
        }

        self.state.stage_end = None;
        self.state.explanation_visible = false;
        self.state.screen = if self.all_stages_completed() {
            Screen::FinalResult
        } else {
            Screen::StageSelect
        };
        self.state.screen
    }

    /// Grant access to a stage. Idempotent.
    ///
    /// Returns `true` if the stage was newly unlocked.
    pub fn unlock_stage(&mut self, stage_id: StageId) -> bool {
        if !self.catalog.contains(stage_id) {
            tracing::debug!(stage = %stage_id, "unlock_stage ignored: unknown stage");
            return false;
        }
        self.state.unlocked.insert(stage_id)
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        self.state = QuizState::default();
    }

    fn complete_stage(&mut self, stage_id: StageId) -> StageEnd {
        let catalog = Arc::clone(&self.catalog);
        let (score, total, passing_score) = match catalog.stage(stage_id) {
            Some(stage) => (self.state.answers.score(stage), stage.total(), stage.passing_score),
            None => (0, 0, 0),
        };
        let passed = score >= passing_score;

        self.state
            .results
            .insert(stage_id, StageResult { score, total, passed });

        let next = stage_id.next();
        let unlocked = if passed && catalog.contains(next) && self.unlock_stage(next) {
            Some(next)
        } else {
            None
        };

        let end = StageEnd {
            stage_id,
            score,
            total,
            passed,
            passing_score,
            percentage: rank::percentage(u64::from(score), u64::from(total)),
            unlocked,
        };
        self.state.stage_end = Some(end);

        tracing::info!(
            stage = %stage_id,
            score,
            total,
            passed,
            unlocked = ?unlocked,
            "stage completed"
        );
        end
    }

    fn is_active_question(&self, stage_id: StageId, question_index: usize) -> bool {
        self.state.screen == Screen::Question
            && self.state.current_stage == stage_id
            && self.state.current_question == question_index
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Current screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.state.screen
    }

    /// Id of the current stage.
    #[must_use]
    pub fn current_stage_id(&self) -> StageId {
        self.state.current_stage
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.state.current_question
    }

    /// The current stage.
    #[must_use]
    pub fn current_stage(&self) -> Option<&Stage> {
        self.catalog.stage(self.state.current_stage)
    }

    /// The current question.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_stage()
            .and_then(|s| s.question(self.state.current_question))
    }

    /// Whether the explanation of the current question is shown.
    #[must_use]
    pub fn explanation_visible(&self) -> bool {
        self.state.explanation_visible
    }

    /// Pending interstitial payload, if a stage just ended.
    #[must_use]
    pub fn pending_stage_end(&self) -> Option<&StageEnd> {
        self.state.stage_end.as_ref()
    }

    /// Check whether a stage can be started.
    #[must_use]
    pub fn is_unlocked(&self, stage_id: StageId) -> bool {
        self.state.unlocked.contains(&stage_id)
    }

    /// Unlocked stage ids in ascending order.
    pub fn unlocked_stages(&self) -> impl Iterator<Item = StageId> + '_ {
        self.state.unlocked.iter().copied()
    }

    /// Stored result of a stage.
    #[must_use]
    pub fn stage_result(&self, stage_id: StageId) -> Option<&StageResult> {
        self.state.results.get(&stage_id)
    }

    /// Recorded answer for a question.
    #[must_use]
    pub fn answer(&self, stage_id: StageId, question_index: usize) -> Option<usize> {
        self.state.answers.get(stage_id, question_index)
    }

    /// Correct answers so far in the current stage, computed from the record.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.current_stage()
            .map_or(0, |stage| self.state.answers.score(stage))
    }

    /// Sum of scores over stored results.
    #[must_use]
    pub fn aggregate_score(&self) -> u32 {
        self.state
            .results
            .values()
            .fold(0u32, |acc, r| acc.saturating_add(r.score))
    }

    /// Sum of question totals over stored results.
    #[must_use]
    pub fn aggregate_total(&self) -> u32 {
        self.state
            .results
            .values()
            .fold(0u32, |acc, r| acc.saturating_add(r.total))
    }

    /// `round(100 * aggregate_score / aggregate_total)`, 0 without results.
    #[must_use]
    pub fn aggregate_percentage(&self) -> u32 {
        rank::percentage(
            u64::from(self.aggregate_score()),
            u64::from(self.aggregate_total()),
        )
    }

    /// Tier for a percentage.
    #[must_use]
    pub fn rank_for(&self, percentage: u32) -> Tier {
        rank::rank_for(percentage)
    }

    /// Tier and rank presentation for the aggregate percentage.
    #[must_use]
    pub fn rank(&self) -> (Tier, &RankInfo) {
        self.catalog.ranks().for_percentage(self.aggregate_percentage())
    }

    /// Every stage has a passed result.
    #[must_use]
    pub fn all_stages_passed(&self) -> bool {
        self.catalog
            .stage_ids()
            .all(|id| self.state.results.get(&id).is_some_and(|r| r.passed))
    }

    /// Every stage has a result, passed or not.
    #[must_use]
    pub fn all_stages_completed(&self) -> bool {
        self.catalog
            .stage_ids()
            .all(|id| self.state.results.contains_key(&id))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::{RankInfo, RankTable};

    /// Build a catalog of `stages` stages with `per_stage` questions each.
    /// Question `i` has correct answer `i % 3`.
    fn catalog(stages: u32, per_stage: usize, passing: u32) -> Catalog {
        let info = |t: &str| RankInfo {
            title: t.to_string(),
            description: String::new(),
            icon: String::new(),
            razryad: None,
        };
        let stages = (1..=stages)
            .map(|id| Stage {
                id: StageId(id),
                title: format!("Stage {id}"),
                subtitle: None,
                description: None,
                icon: None,
                passing_score: passing,
                questions: (0..per_stage)
                    .map(|i| Question {
                        id: i as u32 + 1,
                        prompt: format!("Q{i}"),
                        options: vec!["a".into(), "b".into(), "c".into()],
                        correct_answer: i % 3,
                        explanation: format!("E{i}"),
                    })
                    .collect(),
            })
            .collect();
        Catalog::new(
            stages,
            RankTable {
                master: info("master"),
                high: info("high"),
                medium: info("medium"),
                low: info("low"),
            },
        )
        .expect("valid catalog")
    }

    fn answer_all(quiz: &mut QuizController, correct: bool) -> StageEnd {
        let stage = quiz.current_stage_id();
        let count = quiz.current_stage().expect("stage").question_count();
        let mut end = None;
        for i in 0..count {
            let right = i % 3;
            let option = if correct { right } else { (right + 1) % 3 };
            assert!(quiz.record_answer(stage, i, option));
            match quiz.advance() {
                Advance::Moved { index } => assert_eq!(index, i + 1),
                Advance::StageEnded(e) => end = Some(e),
                Advance::Ignored => unreachable!("advance ignored at question {i}"),
            }
        }
        end.expect("stage ended")
    }

    #[test]
    fn initial_state() {
        let quiz = QuizController::new(catalog(3, 2, 2));
        assert_eq!(quiz.screen(), Screen::Landing);
        assert_eq!(quiz.current_stage_id(), StageId(1));
        assert_eq!(quiz.current_question_index(), 0);
        assert_eq!(quiz.unlocked_stages().collect::<Vec<_>>(), vec![StageId(1)]);
        assert!(quiz.state().answers.is_empty());
        assert!(quiz.state().results.is_empty());
        assert!(!quiz.explanation_visible());
    }

    #[test]
    fn begin_locked_stage_is_noop() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        let before = quiz.state().clone();
        assert!(!quiz.begin_stage(StageId(2)));
        assert!(!quiz.begin_stage(StageId(9)));
        assert_eq!(quiz.state(), &before);
    }

    #[test]
    fn begin_stage_enters_question_screen() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        assert!(quiz.begin_stage(StageId(1)));
        assert_eq!(quiz.screen(), Screen::Question);
        assert_eq!(quiz.current_question_index(), 0);
        assert_eq!(quiz.current_score(), 0);
    }

    #[test]
    fn answer_shows_explanation_and_is_write_once() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));

        assert!(quiz.record_answer(StageId(1), 0, 2));
        assert!(quiz.explanation_visible());
        assert!(!quiz.record_answer(StageId(1), 0, 0));
        assert_eq!(quiz.answer(StageId(1), 0), Some(2));
    }

    #[test]
    fn out_of_range_answers_discarded() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));

        assert!(!quiz.record_answer(StageId(1), 0, 3));
        assert!(!quiz.record_answer(StageId(1), 5, 0));
        assert!(!quiz.record_answer(StageId(2), 0, 0));
        assert!(!quiz.explanation_visible());
        assert!(quiz.state().answers.is_empty());
    }

    #[test]
    fn advance_requires_answer() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        assert_eq!(quiz.advance(), Advance::Ignored);

        quiz.begin_stage(StageId(1));
        assert_eq!(quiz.advance(), Advance::Ignored);

        quiz.record_answer(StageId(1), 0, 0);
        assert_eq!(quiz.advance(), Advance::Moved { index: 1 });
        assert!(!quiz.explanation_visible());
    }

    #[test]
    fn last_advance_scores_without_changing_screen() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));
        let end = answer_all(&mut quiz, true);

        assert_eq!(end.score, 2);
        assert_eq!(end.total, 2);
        assert!(end.passed);
        assert_eq!(end.unlocked, Some(StageId(2)));
        assert_eq!(end.percentage, 100);
        assert_eq!(quiz.screen(), Screen::Question);
        assert_eq!(quiz.pending_stage_end(), Some(&end));
        assert!(quiz.is_unlocked(StageId(2)));

        // A second advance does not rescore.
        assert_eq!(quiz.advance(), Advance::Ignored);
    }

    #[test]
    fn acknowledge_returns_to_stage_select() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));
        answer_all(&mut quiz, true);
        quiz.navigate_to(Screen::StageResult);

        assert_eq!(quiz.acknowledge_stage_end(), Screen::StageSelect);
        assert!(quiz.pending_stage_end().is_none());
    }

    #[test]
    fn acknowledge_outside_stage_flow_is_noop() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        assert_eq!(quiz.acknowledge_stage_end(), Screen::Landing);
    }

    #[test]
    fn acknowledge_mid_stage_is_noop() {
        let mut quiz = QuizController::new(catalog(2, 2, 0));
        for id in [StageId(1), StageId(2)] {
            assert!(quiz.begin_stage(id));
            answer_all(&mut quiz, true);
            quiz.acknowledge_stage_end();
        }
        assert_eq!(quiz.screen(), Screen::FinalResult);

        // A retry in progress must not jump to the final screen.
        assert!(quiz.navigate_to(Screen::StageSelect));
        assert!(quiz.begin_stage(StageId(1)));
        assert!(quiz.record_answer(StageId(1), 0, 0));
        assert_eq!(quiz.acknowledge_stage_end(), Screen::Question);
        assert_eq!(quiz.current_stage_id(), StageId(1));
        assert_eq!(quiz.current_question_index(), 0);
        assert!(quiz.explanation_visible());
    }

    #[test]
    fn advance_reveals_answer_recorded_ahead() {
        let mut quiz = QuizController::new(catalog(1, 3, 0));
        assert!(quiz.begin_stage(StageId(1)));

        assert!(quiz.record_answer(StageId(1), 1, 2));
        assert!(!quiz.explanation_visible());

        assert!(quiz.record_answer(StageId(1), 0, 0));
        assert_eq!(quiz.advance(), Advance::Moved { index: 1 });
        assert!(quiz.explanation_visible());
        let view = quiz.question_view().expect("question on screen");
        assert_eq!(view.explanation.as_deref(), Some("E1"));

        assert_eq!(quiz.advance(), Advance::Moved { index: 2 });
        assert!(!quiz.explanation_visible());
        assert!(quiz.question_view().expect("question").explanation.is_none());
    }

    #[test]
    fn final_screen_uses_merged_results() {
        let mut quiz = QuizController::new(catalog(2, 1, 0));
        for id in [StageId(1), StageId(2)] {
            assert!(quiz.begin_stage(id));
            answer_all(&mut quiz, false);
            let expected = if id == StageId(2) {
                Screen::FinalResult
            } else {
                Screen::StageSelect
            };
            assert_eq!(quiz.acknowledge_stage_end(), expected);
        }
        assert!(quiz.all_stages_passed());
    }

    #[test]
    fn final_screen_refused_until_complete() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        assert!(!quiz.navigate_to(Screen::FinalResult));
        assert_eq!(quiz.screen(), Screen::Landing);
        assert!(quiz.navigate_to(Screen::StageSelect));
    }

    #[test]
    fn end_stage_session_keeps_answers() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));
        quiz.record_answer(StageId(1), 0, 0);
        quiz.end_stage_session();

        assert_eq!(quiz.screen(), Screen::StageSelect);
        assert_eq!(quiz.answer(StageId(1), 0), Some(0));
        assert!(!quiz.explanation_visible());
    }

    #[test]
    fn retry_starts_fresh_and_overwrites_result() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));
        let first = answer_all(&mut quiz, false);
        assert!(!first.passed);
        quiz.acknowledge_stage_end();

        assert!(quiz.begin_stage(StageId(1)));
        assert_eq!(quiz.current_score(), 0);
        assert_eq!(quiz.answer(StageId(1), 0), None);

        let second = answer_all(&mut quiz, true);
        assert!(second.passed);
        assert_eq!(quiz.stage_result(StageId(1)).map(|r| r.score), Some(2));
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        assert!(quiz.unlock_stage(StageId(3)));
        assert!(!quiz.unlock_stage(StageId(3)));
        assert!(!quiz.unlock_stage(StageId(4)));
        assert_eq!(quiz.unlocked_stages().count(), 2);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut quiz = QuizController::new(catalog(3, 2, 2));
        quiz.begin_stage(StageId(1));
        answer_all(&mut quiz, true);
        quiz.acknowledge_stage_end();

        quiz.reset();
        assert_eq!(quiz.state(), &QuizState::default());
    }

    #[test]
    fn aggregates() {
        let mut quiz = QuizController::new(catalog(2, 3, 1));
        assert_eq!(quiz.aggregate_percentage(), 0);

        quiz.begin_stage(StageId(1));
        answer_all(&mut quiz, true);
        quiz.acknowledge_stage_end();
        quiz.begin_stage(StageId(2));
        answer_all(&mut quiz, false);

        assert_eq!(quiz.aggregate_score(), 3);
        assert_eq!(quiz.aggregate_total(), 6);
        assert_eq!(quiz.aggregate_percentage(), 50);
        assert_eq!(quiz.rank().0, Tier::Medium);
        assert_eq!(quiz.rank_for(95), Tier::Master);
        assert!(!quiz.all_stages_passed());
        assert!(quiz.all_stages_completed());
    }
}

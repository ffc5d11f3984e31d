//! # Core Type Definitions
//!
//! This module contains the small value types shared across the quiz engine:
//! - Stage identifiers (`StageId`)
//! - Screen tags (`Screen`)
//! - Rank tiers (`Tier`)
//! - Per-stage outcomes (`StageResult`, `StageEnd`)
//! - Error types (`CatalogError`, `QuizError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they key a `BTreeMap`/`BTreeSet`

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// STAGE IDENTIFIER
// =============================================================================

/// Identifier of a stage in the catalog.
///
/// Stages are numbered `1..=N` with no gaps, so `StageId(1)` is always the
/// first stage and always unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(pub u32);

impl StageId {
    /// The first stage of every catalog.
    pub const FIRST: StageId = StageId(1);

    /// Get the raw stage number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The stage that follows this one (saturating).
    #[must_use]
    pub const fn next(self) -> StageId {
        StageId(self.0.saturating_add(1))
    }

    /// The stage before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<StageId> {
        if self.0 > 1 {
            Some(StageId(self.0 - 1))
        } else {
            None
        }
    }

    /// Zero-based position of this stage in the catalog.
    #[must_use]
    pub(crate) fn position(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SCREEN
// =============================================================================

/// The screen the presentation layer should show.
///
/// Navigation is a flat tag; the only extra payload is the pending
/// [`StageEnd`] held by the controller while the interstitial is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Landing,
    StageSelect,
    Question,
    StageResult,
    FinalResult,
}

impl Screen {
    /// Get the wire name of the screen.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::StageSelect => "stage-select",
            Screen::Question => "question",
            Screen::StageResult => "stage-result",
            Screen::FinalResult => "final-result",
        }
    }

    /// True while a stage attempt is on screen (questions or interstitial).
    #[must_use]
    pub fn in_stage_flow(&self) -> bool {
        matches!(self, Screen::Question | Screen::StageResult)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RANK TIER
// =============================================================================

/// Qualification tier derived from the aggregate percentage.
///
/// Ordered from lowest to highest so `Tier::Low < Tier::Master`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
    Master,
}

impl Tier {
    /// All tiers, highest first (the order breakpoints are checked in).
    pub const DESCENDING: [Tier; 4] = [Tier::Master, Tier::High, Tier::Medium, Tier::Low];

    /// Get the catalog key of the tier.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
            Tier::Master => "master",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// STAGE OUTCOMES
// =============================================================================

/// Stored outcome of a completed stage attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResult {
    /// Number of correct answers.
    pub score: u32,
    /// Number of questions in the stage.
    pub total: u32,
    /// `score >= passing_score` of the stage.
    pub passed: bool,
}

impl StageResult {
    /// Percentage of correct answers, rounded half-up.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        crate::rank::percentage(u64::from(self.score), u64::from(self.total))
    }
}

/// Transient payload returned when the last question of a stage is advanced.
///
/// Carries what the interstitial shows. It lives in the controller only until
/// the interstitial is acknowledged or the stage session is ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEnd {
    pub stage_id: StageId,
    pub score: u32,
    pub total: u32,
    pub passed: bool,
    pub passing_score: u32,
    pub percentage: u32,
    /// Stage unlocked by this result, if it was newly granted.
    pub unlocked: Option<StageId>,
}

impl StageEnd {
    /// The result that was stored for the stage.
    #[must_use]
    pub fn result(&self) -> StageResult {
        StageResult {
            score: self.score,
            total: self.total,
            passed: self.passed,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Reasons a catalog is refused at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog has no stages.
    #[error("Catalog contains no stages")]
    NoStages,

    /// Stage ids must run 1, 2, 3, ... in catalog order.
    #[error("Stage at position {position} has id {found}, expected {expected}")]
    NonContiguousStageId {
        position: usize,
        expected: StageId,
        found: StageId,
    },

    /// A stage without questions.
    #[error("Stage {0} has no questions")]
    EmptyStage(StageId),

    /// Question ids must be unique within a stage.
    #[error("Stage {stage} repeats question id {question_id}")]
    DuplicateQuestionId { stage: StageId, question_id: u32 },

    /// A question with fewer options than the minimum.
    #[error("Stage {stage}, question {question}: {count} options (minimum {min})")]
    TooFewOptions {
        stage: StageId,
        question: usize,
        count: usize,
        min: usize,
    },

    /// A question with more options than can be lettered.
    #[error("Stage {stage}, question {question}: {count} options (maximum {max})")]
    TooManyOptions {
        stage: StageId,
        question: usize,
        count: usize,
        max: usize,
    },

    /// The correct option index does not name an option.
    #[error("Stage {stage}, question {question}: correct answer {correct} outside 0..{count}")]
    CorrectAnswerOutOfRange {
        stage: StageId,
        question: usize,
        correct: usize,
        count: usize,
    },

    /// The passing score exceeds the number of questions.
    #[error("Stage {stage}: passing score {passing_score} exceeds {question_count} questions")]
    PassingScoreOutOfRange {
        stage: StageId,
        passing_score: u32,
        question_count: usize,
    },
}

/// Errors that can occur in the quiz system.
///
/// - No silent failures at the boundary
/// - Caller-contract violations on the controller are NOT errors (they are
///   ignored no-ops); this type covers loading and I/O
#[derive(Debug, Error)]
pub enum QuizError {
    /// The catalog failed validation.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration could not be read or applied.
    #[error("Configuration error: {0}")]
    Config(String),
}

// =============================================================================
// TESTS
// =============================================================================

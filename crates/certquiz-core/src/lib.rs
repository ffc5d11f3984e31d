//! # certquiz-core
//!
//! The deterministic quiz progression engine for certquiz - THE LOGIC.
//!
//! A certification quiz is a sequence of gated stages. Each stage is a fixed
//! set of multiple-choice questions with a passing score; passing a stage
//! unlocks the next, and once every stage has a result the aggregate
//! percentage maps onto a qualification rank.
//!
//! ## Architecture
//!
//! - [`Catalog`]: validated, read-only question content (shared via `Arc`)
//! - [`QuizController`]: the state machine (screens, unlocking, answers,
//!   results) with commands that mutate it and pure queries
//! - [`view`]: projections a presentation layer renders
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Holds state for one session, in memory only
//! - Never initiates interaction; only reacts to explicit commands
//! - Treats caller-contract violations as ignored no-ops, never panics
//! - Has NO async, NO network, NO file I/O (pure Rust)
//!
//! ## Example
//!
//! ```
//! use certquiz_core::{Advance, QuizController, StageId, formats::catalog_from_json};
//!
//! let json = r#"{
//!   "stages": [{"id": 1, "title": "Basics", "passingScore": 1, "questions": [
//!     {"id": 1, "question": "2 + 2?", "options": ["3", "4"], "correctAnswer": 1, "explanation": "4"}
//!   ]}],
//!   "ranks": {
//!     "master": {"title": "Master", "description": "", "icon": ""},
//!     "high": {"title": "High", "description": "", "icon": ""},
//!     "medium": {"title": "Medium", "description": "", "icon": ""},
//!     "low": {"title": "Low", "description": "", "icon": ""}
//!   }
//! }"#;
//!
//! let catalog = catalog_from_json(json.as_bytes()).expect("valid catalog");
//! let mut quiz = QuizController::new(catalog);
//!
//! assert!(quiz.begin_stage(StageId(1)));
//! assert!(quiz.record_answer(StageId(1), 0, 1));
//! match quiz.advance() {
//!     Advance::StageEnded(end) => assert!(end.passed),
//!     other => unreachable!("unexpected {other:?}"),
//! }
//! assert!(quiz.all_stages_passed());
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod answers;
pub mod catalog;
pub mod controller;
pub mod formats;
pub mod primitives;
pub mod rank;
pub mod types;
pub mod view;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{CatalogError, QuizError, Screen, StageEnd, StageId, StageResult, Tier};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use answers::AnswerRecord;
pub use catalog::{Catalog, Question, Stage};
pub use controller::{Advance, QuizController, QuizState};
pub use rank::{RankInfo, RankTable, percentage, rank_for};
pub use view::{
    FinalReport, OptionState, OptionView, QuestionView, QuizSnapshot, StageCard, StageSummary,
};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{catalog_from_json, catalog_to_json};

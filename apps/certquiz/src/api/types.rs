//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use certquiz_core::{Advance, QuizSnapshot, Screen, StageCard, StageId};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// COMMAND REQUESTS
// =============================================================================

/// Navigation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub screen: Screen,
}

/// Request to start a stage attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeginStageRequest {
    pub stage_id: StageId,
}

/// Answer submission.
///
/// Indexes are zero-based; option 0 is shown as "A".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub stage_id: StageId,
    pub question_index: usize,
    pub option_index: usize,
}

// =============================================================================
// COMMAND RESPONSES
// =============================================================================

/// Result of a command.
///
/// `applied` is false when the controller ignored the command; the snapshot
/// is taken after the command either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub applied: bool,
    pub snapshot: QuizSnapshot,
}

impl CommandResponse {
    /// Build a response from a flag and a snapshot.
    #[must_use]
    pub fn new(applied: bool, snapshot: QuizSnapshot) -> Self {
        Self { applied, snapshot }
    }
}

/// Result of `POST /advance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceResponse {
    pub applied: bool,
    pub advance: Advance,
    pub snapshot: QuizSnapshot,
}

/// Result of `POST /stage/acknowledge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgeResponse {
    pub applied: bool,
    pub screen: Screen,
    pub snapshot: QuizSnapshot,
}

// =============================================================================
// QUERY RESPONSES
// =============================================================================

/// Stage cards for the selection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagesResponse {
    pub stages: Vec<StageCard>,
}

/// Error body for queries that have nothing to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Queries take the read lock; commands take the write lock, so commands are
//! applied one at a time.

use super::{
    AppState,
    types::{
        AcknowledgeResponse, AdvanceResponse, AnswerRequest, BeginStageRequest, CommandResponse,
        ErrorResponse, HealthResponse, NavigateRequest, StagesResponse,
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use certquiz_core::{Advance, Screen};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// QUERY HANDLERS
// =============================================================================

/// Full state snapshot.
pub async fn state_handler(State(state): State<AppState>) -> impl IntoResponse {
    let quiz = state.quiz.read().await;
    (StatusCode::OK, Json(quiz.snapshot()))
}

/// Stage cards.
pub async fn stages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let quiz = state.quiz.read().await;
    let response = StagesResponse {
        stages: quiz.stage_cards(),
    };
    (StatusCode::OK, Json(response))
}

/// The active question, or 409 when no question is on screen.
pub async fn question_handler(State(state): State<AppState>) -> impl IntoResponse {
    let quiz = state.quiz.read().await;
    match quiz.question_view() {
        Some(view) => (StatusCode::OK, Json(view)).into_response(),
        None => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(format!(
                "No question on screen (screen is {})",
                quiz.screen()
            ))),
        )
            .into_response(),
    }
}

/// The final report, or 409 until every stage has a result.
pub async fn report_handler(State(state): State<AppState>) -> impl IntoResponse {
    let quiz = state.quiz.read().await;
    match quiz.final_report() {
        Some(report) => (StatusCode::OK, Json(report)).into_response(),
        None => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("Not every stage has a result yet")),
        )
            .into_response(),
    }
}

// =============================================================================
// COMMAND HANDLERS
// =============================================================================

/// Change the screen.
pub async fn navigate_handler(
    State(state): State<AppState>,
    Json(request): Json<NavigateRequest>,
) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let applied = quiz.navigate_to(request.screen);
    (StatusCode::OK, Json(CommandResponse::new(applied, quiz.snapshot())))
}

/// Start a stage attempt.
pub async fn begin_stage_handler(
    State(state): State<AppState>,
    Json(request): Json<BeginStageRequest>,
) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let applied = quiz.begin_stage(request.stage_id);
    (StatusCode::OK, Json(CommandResponse::new(applied, quiz.snapshot())))
}

/// Leave the active stage.
///
/// Reported as applied when a stage was on screen or an interstitial was
/// pending.
pub async fn end_stage_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let applied = quiz.screen().in_stage_flow() || quiz.pending_stage_end().is_some();
    quiz.end_stage_session();
    (StatusCode::OK, Json(CommandResponse::new(applied, quiz.snapshot())))
}

/// Dismiss the stage interstitial.
pub async fn acknowledge_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let applied = quiz.screen() == Screen::StageResult || quiz.pending_stage_end().is_some();
    let screen = quiz.acknowledge_stage_end();
    let response = AcknowledgeResponse {
        applied,
        screen,
        snapshot: quiz.snapshot(),
    };
    (StatusCode::OK, Json(response))
}

/// Record an answer.
pub async fn answer_handler(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let applied = quiz.record_answer(
        request.stage_id,
        request.question_index,
        request.option_index,
    );
    (StatusCode::OK, Json(CommandResponse::new(applied, quiz.snapshot())))
}

/// Move past the current question.
pub async fn advance_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    let advance = quiz.advance();
    let response = AdvanceResponse {
        applied: advance != Advance::Ignored,
        advance,
        snapshot: quiz.snapshot(),
    };
    (StatusCode::OK, Json(response))
}

/// Restore the initial state.
pub async fn reset_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut quiz = state.quiz.write().await;
    quiz.reset();
    tracing::info!("quiz state reset");
    (StatusCode::OK, Json(CommandResponse::new(true, quiz.snapshot())))
}

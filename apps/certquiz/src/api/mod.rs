//! # certquiz HTTP API Module
//!
//! This module implements the HTTP adapter using axum. One controller is
//! shared by every request.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /state` - Full state snapshot with aggregates
//! - `GET /stages` - Stage cards
//! - `GET /question` - Active question (409 when none)
//! - `GET /report` - Final report (409 until every stage has a result)
//! - `POST /navigate` - Change the screen
//! - `POST /stage/begin` - Start a stage attempt
//! - `POST /stage/end` - Leave the active stage
//! - `POST /stage/acknowledge` - Dismiss the stage interstitial
//! - `POST /answer` - Record an answer
//! - `POST /advance` - Move past the current question
//! - `POST /reset` - Restore the initial state
//!
//! ## Configuration (Environment Variables)
//!
//! - `CERTQUIZ_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod handlers;
mod types;

pub use handlers::{
    acknowledge_handler, advance_handler, answer_handler, begin_stage_handler, end_stage_handler,
    health_handler, navigate_handler, question_handler, report_handler, reset_handler,
    stages_handler, state_handler,
};
pub use types::{
    AcknowledgeResponse, AdvanceResponse, AnswerRequest, BeginStageRequest, CommandResponse,
    ErrorResponse, HealthResponse, NavigateRequest, StagesResponse,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use certquiz_core::{QuizController, QuizError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB). Command bodies are a few fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Every route served by [`create_router`]: method, path, summary.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/state", "Snapshot of the quiz state"),
    ("GET", "/stages", "Stage cards"),
    ("GET", "/question", "Active question"),
    ("GET", "/report", "Final report"),
    ("POST", "/navigate", "Switch screen"),
    ("POST", "/stage/begin", "Start a stage"),
    ("POST", "/answer", "Record an answer"),
    ("POST", "/advance", "Next question"),
    ("POST", "/stage/acknowledge", "Dismiss the stage result"),
    ("POST", "/stage/end", "Leave the stage"),
    ("POST", "/reset", "Start over"),
    ("GET", "/health", "Health check"),
];

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the quiz controller.
#[derive(Clone)]
pub struct AppState {
    /// The controller for the single quiz session.
    pub quiz: Arc<RwLock<QuizController>>,
}

impl AppState {
    /// Create new app state with a controller.
    #[must_use]
    pub fn new(quiz: QuizController) -> Self {
        Self {
            quiz: Arc::new(RwLock::new(quiz)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `CERTQUIZ_CORS_ORIGINS`:
/// - If "*": allows all origins
/// - If not set: defaults to localhost only
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("CERTQUIZ_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!(
                "CORS: Allowing ALL origins (CERTQUIZ_CORS_ORIGINS=*). Do not expose this server publicly."
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|trimmed| {
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in CERTQUIZ_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE])
            }
        }
        None => {
            tracing::info!("CORS: No CERTQUIZ_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:8080",
    ];
    let origins: Vec<HeaderValue> = localhost_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/state", get(handlers::state_handler))
        .route("/stages", get(handlers::stages_handler))
        .route("/question", get(handlers::question_handler))
        .route("/report", get(handlers::report_handler))
        .route("/navigate", post(handlers::navigate_handler))
        .route("/stage/begin", post(handlers::begin_stage_handler))
        .route("/stage/end", post(handlers::end_stage_handler))
        .route("/stage/acknowledge", post(handlers::acknowledge_handler))
        .route("/answer", post(handlers::answer_handler))
        .route("/advance", post(handlers::advance_handler))
        .route("/reset", post(handlers::reset_handler))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, quiz: QuizController) -> Result<(), QuizError> {
    let state = AppState::new(quiz);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| QuizError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("certquiz HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| QuizError::Io(format!("Server error: {}", e)))
}

/// Resolve on Ctrl+C. Never resolves if the handler cannot be installed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, stopping server"),
        Err(e) => {
            tracing::warn!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

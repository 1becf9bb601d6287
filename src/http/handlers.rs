use super::state::AppState;
use crate::format::{metrics_panel, render_text, MetricBlock, WAITING_FOR_METRICS};
use crate::session::SessionState;
use crate::transcription::TranscriptionSegment;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Serialize;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub state: SessionState,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Placeholder text while no stage has reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub blocks: Vec<MetricBlock>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /session
/// Current UI phase and session state
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    let phase = state.phase.borrow().clone();
    let session = state.session.borrow().clone();

    (
        StatusCode::OK,
        Json(SessionResponse {
            phase: phase.name(),
            reason: phase.reason().map(str::to_string),
            state: session,
        }),
    )
}

/// GET /session/metrics
/// Metric panel as displayed
pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let blocks = metrics_panel(state.session.borrow().metrics());
    let placeholder = blocks.is_empty().then(|| WAITING_FOR_METRICS.to_string());

    (StatusCode::OK, Json(MetricsResponse { placeholder, blocks }))
}

/// GET /session/conversation
/// Both speakers' segments in chronological order
pub async fn get_conversation(State(state): State<AppState>) -> impl IntoResponse {
    let segments: Vec<TranscriptionSegment> = state.session.borrow().conversation_log().to_vec();
    (StatusCode::OK, Json(segments))
}

/// GET /session/render
/// Plain-text rendering of the assistant window
pub async fn get_render(State(state): State<AppState>) -> impl IntoResponse {
    let phase = state.phase.borrow().clone();
    let text = render_text(&phase, &state.session.borrow());
    (StatusCode::OK, text)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

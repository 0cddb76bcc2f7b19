use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::state::AppState;
use crate::analysis::strip_data_url_prefix;
use crate::capture::AudioClip;
use crate::render::AnalysisReport;
use crate::session::{Phase, SessionError, SessionSnapshot};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SubmitAudioRequest {
    /// Base64-encoded audio; a data-URL prefix is tolerated and stripped
    pub data: String,

    /// MIME type of the audio, e.g. "audio/webm"
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct SessionActionResponse {
    pub phase: Phase,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn refused(e: SessionError) -> axum::response::Response {
    (
        StatusCode::CONFLICT,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /session
/// Current session snapshot (phase plus result or error)
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot: SessionSnapshot = state.controller.snapshot().await;
    (StatusCode::OK, Json(snapshot)).into_response()
}

/// GET /session/report
/// Rendered views of the analyzed session
pub async fn get_report(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.controller.snapshot().await;

    match snapshot.analysis {
        Some(result) if snapshot.phase == Phase::Analyzed => {
            (StatusCode::OK, Json(AnalysisReport::from_result(&result))).into_response()
        }
        _ => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "No analysis available for the current session".to_string(),
            }),
        )
            .into_response(),
    }
}

/// POST /session/audio
/// Submit an uploaded audio clip for analysis
pub async fn submit_audio(
    State(state): State<AppState>,
    Json(req): Json<SubmitAudioRequest>,
) -> impl IntoResponse {
    let payload = strip_data_url_prefix(&req.data);

    let bytes = match base64::engine::general_purpose::STANDARD.decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Rejecting audio submission: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Audio payload is not valid base64".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!(
        "Received audio submission: {} bytes of {}",
        bytes.len(),
        req.mime_type
    );

    let clip = AudioClip::new(bytes, req.mime_type);
    match state.controller.submit_clip(clip).await {
        Ok(()) => (
            StatusCode::ACCEPTED,
            Json(SessionActionResponse {
                phase: Phase::Processing,
                message: "Analysis started".to_string(),
            }),
        )
            .into_response(),
        Err(e) => refused(e),
    }
}

/// POST /session/record/start
/// Begin a live microphone recording
pub async fn start_recording(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.start_recording().await {
        Ok(()) => {
            let snapshot = state.controller.snapshot().await;
            let message = match snapshot.phase {
                Phase::Recording => "Recording started".to_string(),
                // Capture failures land in the session as its Error state
                _ => snapshot.error.unwrap_or_else(|| "Recording failed".to_string()),
            };
            (
                StatusCode::OK,
                Json(SessionActionResponse {
                    phase: snapshot.phase,
                    message,
                }),
            )
                .into_response()
        }
        Err(e) => refused(e),
    }
}

/// POST /session/record/stop
/// Finalize the recording and trigger analysis; a no-op when not recording
pub async fn stop_recording(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.stop_recording().await {
        Ok(()) => {
            let snapshot = state.controller.snapshot().await;
            (
                StatusCode::OK,
                Json(SessionActionResponse {
                    phase: snapshot.phase,
                    message: "Recording stopped".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => refused(e),
    }
}

/// POST /session/reset
/// Discard the current result or error and return to idle
pub async fn reset_session(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.reset().await {
        Ok(()) => (
            StatusCode::OK,
            Json(SessionActionResponse {
                phase: Phase::Idle,
                message: "Session reset".to_string(),
            }),
        )
            .into_response(),
        Err(e) => refused(e),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

//! The chat endpoint.

use crate::error::ApiError;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use samaritan_core::SessionKey;
use samaritan_location::FacilityRecord;
use samaritan_triage::{TriageOrchestrator, TurnOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The per-turn orchestrator.
    pub orchestrator: Arc<TriageOrchestrator>,
}

/// Inbound chat turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message; missing is treated as an empty turn.
    #[serde(default)]
    pub message: String,
    /// Caller-supplied session id; required and non-empty.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response envelope, constructed fresh per request.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// `INTAKE` while the conversation continues, `COMPLETE` once
    /// facilities have been returned.
    pub status: &'static str,
    /// True on the facilities turn.
    pub is_final: bool,
    /// Text for the client to speak/display.
    pub voice_response: String,
    /// The model's advice, only on the final turn.
    pub treatment_plan: Option<String>,
    /// Facilities to plot, only on the final turn.
    pub map_data: Option<Vec<FacilityRecord>>,
}

impl From<TurnOutcome> for ChatResponse {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            status: if outcome.is_final { "COMPLETE" } else { "INTAKE" },
            is_final: outcome.is_final,
            voice_response: outcome.voice_response,
            treatment_plan: outcome.treatment_plan,
            map_data: outcome.facilities,
        }
    }
}

/// Builds the application router.
///
/// CORS is permissive: the browser frontend is served from a different
/// origin and talks to this API directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handles one chat turn.
async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!(error = %e, "malformed chat request body");
        ApiError::Internal
    })?;

    let session_id = request
        .session_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingSessionId)?;
    let session = SessionKey::new(session_id);

    info!(session = %session, "chat turn received");
    let outcome = state
        .orchestrator
        .process_turn(&session, &request.message)
        .await;

    Ok(Json(ChatResponse::from(outcome)))
}

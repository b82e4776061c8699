//! Request-boundary error types.
//!
//! Everything unexpected collapses to a generic 500 with a fixed
//! user-facing message; no internals reach the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

/// User-facing message for any internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "I encountered an internal error. Please try again.";

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request carried no usable session id.
    MissingSessionId,
    /// Anything else; details stay in the logs.
    Internal,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSessionId => write!(f, "session id is missing"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingSessionId => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Session ID is required"})),
            )
                .into_response(),
            Self::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"voice_response": INTERNAL_ERROR_MESSAGE})),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_id_maps_to_400() {
        let response = ApiError::MissingSessionId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_500() {
        let response = ApiError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

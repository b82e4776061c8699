//! Error types for the location crate.

use std::fmt;

/// Errors from location resolution.
///
/// Any of these causes the orchestrator to skip the facilities stage for
/// the turn; none is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The HTTP client could not be constructed.
    ClientInit { reason: String },
    /// The geocoding call exceeded its timeout.
    Timeout,
    /// The query did not resolve to any coordinate.
    NotFound { query: String },
    /// The request could not be sent or the response not read.
    RequestFailed { reason: String },
    /// The geocoder returned a non-success status.
    ApiStatus { status: u16 },
    /// The response body did not match the expected shape.
    InvalidResponse { reason: String },
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientInit { reason } => write!(f, "geocoder client init failed: {reason}"),
            Self::Timeout => write!(f, "geocoding timed out"),
            Self::NotFound { query } => write!(f, "no coordinate found for '{query}'"),
            Self::RequestFailed { reason } => write!(f, "geocoding request failed: {reason}"),
            Self::ApiStatus { status } => write!(f, "geocoder returned status {status}"),
            Self::InvalidResponse { reason } => {
                write!(f, "geocoder response invalid: {reason}")
            }
        }
    }
}

impl std::error::Error for LocationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_error_display() {
        let err = LocationError::NotFound {
            query: "Atlantis".to_string(),
        };
        assert!(err.to_string().contains("Atlantis"));
    }
}

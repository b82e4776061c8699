//! Error types for the ai crate.

use std::fmt;

/// Errors from chat-completion calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The HTTP client could not be constructed.
    ClientInit { reason: String },
    /// The request could not be sent or the response not read.
    RequestFailed { reason: String },
    /// The call exceeded the configured timeout.
    Timeout,
    /// The API returned a non-success status.
    ApiStatus { status: u16, body: String },
    /// The response body did not match the expected shape.
    InvalidResponse { reason: String },
    /// The response contained no completion content.
    EmptyResponse,
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientInit { reason } => write!(f, "llm client init failed: {reason}"),
            Self::RequestFailed { reason } => write!(f, "llm request failed: {reason}"),
            Self::Timeout => write!(f, "llm request timed out"),
            Self::ApiStatus { status, body } => {
                write!(f, "llm api returned status {status}: {body}")
            }
            Self::InvalidResponse { reason } => {
                write!(f, "llm response invalid: {reason}")
            }
            Self::EmptyResponse => write!(f, "llm response contained no content"),
        }
    }
}

impl std::error::Error for LlmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_error_display() {
        let err = LlmError::ApiStatus {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));
    }
}

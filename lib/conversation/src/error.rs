//! Error types for the conversation crate.

use std::fmt;

/// Errors from turn store operations.
///
/// The orchestrator degrades these rather than surfacing them: a failed
/// history read becomes an empty history, a failed append is logged and
/// the turn proceeds without durable memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A turn could not be written (e.g. locked storage).
    WriteFailed { reason: String },
    /// History could not be read back.
    ReadFailed { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed { reason } => write!(f, "turn write failed: {reason}"),
            Self::ReadFailed { reason } => write!(f, "history read failed: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

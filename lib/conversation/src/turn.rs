//! Turn types for conversation logs.

use chrono::{DateTime, Utc};
use samaritan_core::{SessionKey, TriageStage, TurnId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The role of a turn's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// User/human turn.
    User,
    /// Assistant turn.
    Assistant,
}

impl TurnRole {
    /// Returns the role as its stored sender label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One immutable message in a session's chronological log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier.
    pub id: TurnId,
    /// The session this turn belongs to.
    pub session: SessionKey,
    /// Sender label as stored. Kept as an open string so logs written by
    /// earlier frontends (which labelled assistant turns "ai") read back
    /// unchanged.
    pub sender: String,
    /// Turn text.
    pub text: String,
    /// Triage stage in effect when the turn was written.
    pub status: TriageStage,
    /// When the turn was written.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a new turn stamped with the current time.
    #[must_use]
    pub fn new(
        session: SessionKey,
        role: TurnRole,
        text: impl Into<String>,
        status: TriageStage,
    ) -> Self {
        Self {
            id: TurnId::new(),
            session,
            sender: role.as_str().to_string(),
            text: text.into(),
            status,
            timestamp: Utc::now(),
        }
    }
}

/// A turn as replayed for context assembly: sender label and text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sender label as stored.
    pub sender: String,
    /// Turn text.
    pub text: String,
}

impl HistoryEntry {
    /// Creates a history entry.
    #[must_use]
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            text: text.into(),
        }
    }
}

impl From<&Turn> for HistoryEntry {
    fn from(turn: &Turn) -> Self {
        Self {
            sender: turn.sender.clone(),
            text: turn.text.clone(),
        }
    }
}

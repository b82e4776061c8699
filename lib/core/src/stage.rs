//! Persisted triage stage.
//!
//! The stage is stored as the status tag on every turn and transitioned
//! deterministically by the orchestrator. A session with no turns starts
//! in [`TriageStage::Intake`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The workflow stage of a triage session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriageStage {
    /// Gathering symptoms.
    #[default]
    Intake,
    /// Advice given; the next user message is treated as a location.
    AwaitingLocation,
    /// Facilities returned.
    Complete,
}

impl TriageStage {
    /// Returns the stage as its stored string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intake => "INTAKE",
            Self::AwaitingLocation => "AWAITING_LOCATION",
            Self::Complete => "COMPLETE",
        }
    }

    /// Returns true if facilities have been returned for this session.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Returns true if the next user message should be treated as a
    /// location.
    #[must_use]
    pub const fn expects_location(&self) -> bool {
        matches!(self, Self::AwaitingLocation)
    }
}

impl fmt::Display for TriageStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a stored status tag is not a known stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStageError {
    /// The unrecognized tag.
    pub tag: String,
}

impl fmt::Display for ParseStageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown triage stage tag '{}'", self.tag)
    }
}

impl std::error::Error for ParseStageError {}

impl FromStr for TriageStage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INTAKE" => Ok(Self::Intake),
            "AWAITING_LOCATION" => Ok(Self::AwaitingLocation),
            "COMPLETE" => Ok(Self::Complete),
            other => Err(ParseStageError {
                tag: other.to_string(),
            }),
        }
    }
}

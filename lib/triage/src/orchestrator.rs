//! The per-turn triage orchestrator.
//!
//! Drives one inbound chat turn through the sequential call chain:
//! history read, context assembly, model call, stage transition, optional
//! facility search, turn persistence. Storage failures degrade rather
//! than abort; a failed model call yields a fixed apology and skips
//! persistence. Nothing is retried.

use crate::context::assemble;
use crate::heuristic::TurnSignals;
use crate::prompt::SYSTEM_INSTRUCTION;
use samaritan_ai::ChatBackend;
use samaritan_conversation::{TurnRole, TurnStore};
use samaritan_core::{SessionKey, TriageStage};
use samaritan_location::{FacilityLocator, FacilityRecord};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Fixed reply when the model call fails.
pub const APOLOGY: &str =
    "I apologize, but I'm currently experiencing a technical issue. Please try again.";

/// The outcome of one processed turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// Stage the session is in after this turn.
    pub stage: TriageStage,
    /// True once facilities have been returned.
    pub is_final: bool,
    /// Text to speak/display to the user.
    pub voice_response: String,
    /// The model's advice, surfaced once the flow concludes.
    pub treatment_plan: Option<String>,
    /// Facilities to plot, present only on the final turn.
    pub facilities: Option<Vec<FacilityRecord>>,
}

impl TurnOutcome {
    fn apology(stage: TriageStage) -> Self {
        Self {
            stage,
            is_final: false,
            voice_response: APOLOGY.to_string(),
            treatment_plan: None,
            facilities: None,
        }
    }

    fn intermediate(stage: TriageStage, reply: String) -> Self {
        Self {
            stage,
            is_final: false,
            voice_response: reply,
            treatment_plan: None,
            facilities: None,
        }
    }

    fn complete(reply: String, facilities: Vec<FacilityRecord>) -> Self {
        Self {
            stage: TriageStage::Complete,
            is_final: true,
            voice_response: format!(
                "I found {} facilities near you. Please check the map below.",
                facilities.len()
            ),
            treatment_plan: Some(reply),
            facilities: Some(facilities),
        }
    }
}

/// Deterministic stage transition from the prior stage and this turn's
/// signals.
#[must_use]
pub fn next_stage(prior: TriageStage, signals: &TurnSignals) -> TriageStage {
    if signals.facilities_returned {
        return TriageStage::Complete;
    }
    if prior.expects_location() {
        // Remains until a search succeeds.
        return TriageStage::AwaitingLocation;
    }
    if signals.location_requested || signals.search_announced {
        TriageStage::AwaitingLocation
    } else {
        prior
    }
}

/// Orchestrates the triage flow over explicit, injected collaborators.
pub struct TriageOrchestrator {
    store: Arc<dyn TurnStore>,
    backend: Arc<dyn ChatBackend>,
    locator: Arc<dyn FacilityLocator>,
}

impl TriageOrchestrator {
    /// Creates an orchestrator over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn TurnStore>,
        backend: Arc<dyn ChatBackend>,
        locator: Arc<dyn FacilityLocator>,
    ) -> Self {
        Self {
            store,
            backend,
            locator,
        }
    }

    /// Processes one inbound chat turn.
    pub async fn process_turn(&self, session: &SessionKey, user_text: &str) -> TurnOutcome {
        let prior_stage = match self.store.latest_status(session).await {
            Ok(stage) => stage,
            Err(e) => {
                warn!(session = %session, error = %e, "status read failed, assuming intake");
                TriageStage::default()
            }
        };

        let history = match self.store.history(session).await {
            Ok(history) => history,
            Err(e) => {
                warn!(session = %session, error = %e, "history read failed, continuing without context");
                Vec::new()
            }
        };

        let messages = assemble(SYSTEM_INSTRUCTION, &history, user_text);

        let reply = match self.backend.complete(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(session = %session, error = %e, "model call failed, returning apology");
                return TurnOutcome::apology(prior_stage);
            }
        };

        let mut signals = TurnSignals::from_reply(&reply);

        let mut facilities = None;
        if prior_stage.expects_location() {
            info!(session = %session, "running facility search");
            match self.locator.resolve_and_search(user_text).await {
                Ok(found) => {
                    signals.facilities_returned = true;
                    facilities = Some(found);
                }
                Err(e) => {
                    info!(session = %session, error = %e, "location resolution failed, skipping facilities");
                }
            }
        }

        let stage = next_stage(prior_stage, &signals);

        // User and assistant turns are two independent appends, not a
        // transaction; a failed write is logged and never surfaced.
        if let Err(e) = self
            .store
            .append(session, TurnRole::User, user_text, prior_stage)
            .await
        {
            error!(session = %session, error = %e, "failed to persist user turn");
        }
        if let Err(e) = self
            .store
            .append(session, TurnRole::Assistant, &reply, stage)
            .await
        {
            error!(session = %session, error = %e, "failed to persist assistant turn");
        }

        match facilities {
            Some(found) => TurnOutcome::complete(reply, found),
            None => TurnOutcome::intermediate(stage, reply),
        }
    }
}

//! The turn store contract and in-memory reference implementation.
//!
//! A session's turns form a strict chronological sequence. The store must
//! serialize concurrent writers to the same session so two turns never
//! interleave; different sessions are independent. User and assistant
//! turns are committed as two separate appends, not atomically.

use crate::error::StoreError;
use crate::turn::{HistoryEntry, Turn, TurnRole};
use async_trait::async_trait;
use samaritan_core::{SessionKey, TriageStage};
use std::collections::HashMap;
use std::sync::Mutex;

/// Trait for turn storage.
#[async_trait]
pub trait TurnStore: Send + Sync {
    /// Appends one immutable turn to the session's log.
    async fn append(
        &self,
        session: &SessionKey,
        role: TurnRole,
        text: &str,
        status: TriageStage,
    ) -> Result<(), StoreError>;

    /// Returns all turns of the session, oldest first.
    ///
    /// An unknown session yields an empty history, never an error.
    async fn history(&self, session: &SessionKey) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Returns the status tag of the most recent turn, or the default
    /// initial stage when the session has no turns.
    async fn latest_status(&self, session: &SessionKey) -> Result<TriageStage, StoreError>;
}

/// In-memory turn store.
///
/// Reference implementation of the store contract; also the test double
/// for the orchestrator. The session log grows unboundedly, which matches
/// the persisted store's documented demo-scale boundary.
#[derive(Debug, Default)]
pub struct MemoryTurnStore {
    turns: Mutex<HashMap<SessionKey, Vec<Turn>>>,
}

impl MemoryTurnStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, HashMap<SessionKey, Vec<Turn>>>, String> {
        self.turns
            .lock()
            .map_err(|_| "turn store lock poisoned".to_string())
    }
}

#[async_trait]
impl TurnStore for MemoryTurnStore {
    async fn append(
        &self,
        session: &SessionKey,
        role: TurnRole,
        text: &str,
        status: TriageStage,
    ) -> Result<(), StoreError> {
        let mut turns = self
            .locked()
            .map_err(|reason| StoreError::WriteFailed { reason })?;
        turns
            .entry(session.clone())
            .or_default()
            .push(Turn::new(session.clone(), role, text, status));
        Ok(())
    }

    async fn history(&self, session: &SessionKey) -> Result<Vec<HistoryEntry>, StoreError> {
        let turns = self
            .locked()
            .map_err(|reason| StoreError::ReadFailed { reason })?;
        Ok(turns
            .get(session)
            .map(|log| log.iter().map(HistoryEntry::from).collect())
            .unwrap_or_default())
    }

    async fn latest_status(&self, session: &SessionKey) -> Result<TriageStage, StoreError> {
        let turns = self
            .locked()
            .map_err(|reason| StoreError::ReadFailed { reason })?;
        Ok(turns
            .get(session)
            .and_then(|log| log.last())
            .map(|turn| turn.status)
            .unwrap_or_default())
    }
}

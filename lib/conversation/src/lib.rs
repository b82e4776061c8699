//! Session-scoped conversation memory for the samaritan platform.
//!
//! This crate provides:
//!
//! - **Turn types**: Immutable chat turns in a chronological per-session log
//! - **Turn Store**: The append/read contract over that log, plus an
//!   in-memory reference implementation

pub mod error;
pub mod store;
pub mod turn;

pub use error::StoreError;
pub use store::{MemoryTurnStore, TurnStore};
pub use turn::{HistoryEntry, Turn, TurnRole};

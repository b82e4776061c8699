//! Triage flow orchestration for the samaritan platform.
//!
//! This crate drives one chat turn end to end:
//!
//! - **Context assembly**: Fixed instruction + replayed history + new turn
//! - **Heuristics**: Keyword triggers that signal the location stage
//! - **Orchestrator**: Model call, stage transitions, facility search,
//!   turn persistence

pub mod context;
pub mod heuristic;
pub mod orchestrator;
pub mod prompt;

pub use context::assemble;
pub use heuristic::{TurnSignals, is_location_request, is_search_execution};
pub use orchestrator::{TriageOrchestrator, TurnOutcome};
pub use prompt::SYSTEM_INSTRUCTION;

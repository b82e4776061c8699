//! Language-model backend for the samaritan platform.
//!
//! This crate provides:
//!
//! - **Chat types**: The wire message list sent to a chat-completion API
//! - **Chat Backend**: The trait the orchestrator calls for one completion
//! - **OpenAI-compatible client**: A `reqwest` implementation targeting
//!   Groq-style `/chat/completions` endpoints

pub mod backend;
pub mod client;
pub mod error;

pub use backend::{ChatBackend, ChatMessage, LlmConfig};
pub use client::OpenAiCompatClient;
pub use error::LlmError;

//! Chat backend abstraction.

use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A message in a chat-completion request.
///
/// The role is an open string rather than a closed enum: history replayed
/// from storage may carry sender labels outside the standard three, and
/// those pass through to the wire unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: String,
    /// The message content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a message with an arbitrary role label.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Configuration for the chat backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key.
    pub api_key: String,

    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

fn default_timeout_seconds() -> u64 {
    30
}

/// Trait for chat-completion backends.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Generates one completion for the given message list.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or yields no content. Callers
    /// degrade this to a fixed apology; it is never retried.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Returns the model name.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_constructors() {
        assert_eq!(ChatMessage::system("x").role, "system");
        assert_eq!(ChatMessage::user("x").role, "user");
        assert_eq!(ChatMessage::assistant("x").role, "assistant");
    }

    #[test]
    fn open_role_passes_through() {
        let msg = ChatMessage::new("ai", "legacy label");
        assert_eq!(msg.role, "ai");
    }

    #[test]
    fn message_wire_shape() {
        let json = serde_json::to_value(ChatMessage::user("hello")).expect("serialize");
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn config_defaults() {
        let config: LlmConfig =
            serde_json::from_value(serde_json::json!({"api_key": "k"})).expect("deserialize");
        assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert!((config.temperature - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.timeout_seconds, 30);
    }
}

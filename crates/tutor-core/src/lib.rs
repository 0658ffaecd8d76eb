//! Core domain types and error definitions for tutor.
//!
//! This crate provides the fundamental types shared across the workspace:
//!
//! - [`AgentError`] - Error type for LLM gateway operations
//! - [`Content`], [`Part`] and [`ContentRole`] - Role-tagged messages sent to the gateway
//! - [`Message`] and [`MessageRole`] - Conversation transcript entries
//! - [`ModelConfig`] - LLM model configuration
//!
//! # Example
//!
//! ```rust
//! use tutor_core::{Content, ContentRole, ModelConfig};
//!
//! let content = Content::user("Explain recursion");
//! assert_eq!(content.role, ContentRole::User);
//! assert_eq!(content.text(), "Explain recursion");
//!
//! let model = ModelConfig::new("gemini-2.5-flash-lite");
//! assert!(model.api_base.is_none());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used when no override is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Errors that can occur while talking to the LLM gateway.
#[derive(Error, Debug)]
pub enum AgentError {
    /// LLM API request failed (transport, status, undecodable body, or empty completion).
    #[error("LLM request failed: {0}")]
    LlmError(String),
}

/// Role of a content block sent to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// Text written by the user (or instructions on their behalf).
    User,
    /// Text previously produced by the model.
    Model,
}

/// A single text part inside a [`Content`] block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// A role-tagged sequence of text parts, the unit the gateway consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub role: ContentRole,
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates a user content block with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Creates a model content block with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ContentRole::Model,
            parts: vec![Part { text: text.into() }],
        }
    }

    /// Concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Role of a message in a conversation transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the assistant/LLM.
    Assistant,
}

/// A single message in a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl Message {
    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: MessageRole::User, content: content.into() }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: MessageRole::Assistant, content: content.into() }
    }
}

/// Configuration for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// The model identifier passed to the gateway (e.g., "gemini-2.5-flash-lite").
    pub model: String,
    /// Optional API base URL for proxies or alternative endpoints.
    pub api_base: Option<String>,
}

impl ModelConfig {
    /// Creates a config for `model` against the default endpoint.
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), api_base: None }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_serializes_in_gateway_shape() {
        let content = Content::user("hi");
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "parts": [{"text": "hi"}]}));

        let json = serde_json::to_value(Content::model("ok")).unwrap();
        assert_eq!(json["role"], "model");
    }

    #[test]
    fn content_text_joins_parts() {
        let content = Content {
            role: ContentRole::Model,
            parts: vec![Part { text: "a".into() }, Part { text: "b".into() }],
        };
        assert_eq!(content.text(), "ab");
    }

    #[test]
    fn message_roles_are_lowercase() {
        let json = serde_json::to_value(Message::assistant("done")).unwrap();
        assert_eq!(json["role"], "assistant");
        let back: Message = serde_json::from_value(json).unwrap();
        assert_eq!(back, Message::assistant("done"));
    }

    #[test]
    fn llm_error_display() {
        let err = AgentError::LlmError("timeout".into());
        assert_eq!(err.to_string(), "LLM request failed: timeout");
    }

    #[test]
    fn default_model_config() {
        let config = ModelConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_base.is_none());
    }
}

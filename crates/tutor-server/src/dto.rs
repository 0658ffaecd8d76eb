//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};
use tutor_core::Message;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub user_id: String,
}

/// Response body for the chat endpoint. `error` is only serialized when set.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl ChatResponse {
    /// Successful reply carrying the formatted completion.
    pub fn ok(response: String) -> Self {
        Self { response, error: false }
    }

    /// Failure reply; the message is prefixed with `"Error: "`.
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self { response: format!("Error: {}", message), error: true }
    }
}

/// A user's recorded transcript.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub user_id: String,
    pub messages: Vec<Message>,
}

/// Response from clearing a transcript.
#[derive(Debug, Serialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
}

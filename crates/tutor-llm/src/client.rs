//! Gateway trait and the response types shared by every implementation.

use async_trait::async_trait;
use tutor_core::{AgentError, Content};

/// Token usage and timing metrics from an LLM call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmMetrics {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub elapsed_ms: u64,
}

/// Complete response from an LLM call.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub content: String,
    pub metrics: LlmMetrics,
}

/// A hosted model that turns role-tagged contents into a single completion.
///
/// Implementations make one attempt per call; retry and timeout policy is
/// left to the transport.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Sends `contents` to `model` and returns the completion text.
    async fn generate(&self, model: &str, contents: &[Content]) -> Result<LlmResponse, AgentError>;
}

//! Google Gemini `generateContent` client.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tutor_core::{AgentError, Content};

use crate::{LlmGateway, LlmMetrics, LlmResponse};

/// Public Gemini REST endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: &'a [Content],
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateResponse {
    /// Text of the first candidate, all text parts joined. `None` if it has no text.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let texts: Vec<&str> = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if texts.is_empty() {
            return None;
        }
        Some(texts.concat())
    }
}

/// Converts any error into an AgentError::LlmError.
fn llm_err(e: impl ToString) -> AgentError {
    AgentError::LlmError(e.to_string())
}

/// Client for Google's Gemini API.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl GeminiClient {
    /// Creates a new client. `api_base` overrides [`GEMINI_API_BASE`].
    pub fn new(api_key: impl Into<String>, api_base: Option<&str>) -> Self {
        let api_key = api_key.into();
        let api_base = api_base
            .unwrap_or(GEMINI_API_BASE)
            .trim_end_matches('/')
            .to_string();
        info!("GeminiClient: api_base={}, api_key_set={}", api_base, !api_key.is_empty());
        Self {
            client: Client::new(),
            api_base,
            api_key,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait]
impl LlmGateway for GeminiClient {
    async fn generate(&self, model: &str, contents: &[Content]) -> Result<LlmResponse, AgentError> {
        let start = Instant::now();
        debug!("Gemini request: model={}, contents={}", model, contents.len());

        let response = self
            .client
            .post(self.endpoint(model))
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest { contents })
            .send()
            .await
            .map_err(llm_err)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::LlmError(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let resp: GenerateResponse = response.json().await.map_err(llm_err)?;
        let content = resp
            .text()
            .ok_or_else(|| AgentError::LlmError("No response content".into()))?;

        let (input_tokens, output_tokens) = resp
            .usage_metadata
            .map(|u| (u.prompt_token_count.unwrap_or(0), u.candidates_token_count.unwrap_or(0)))
            .unwrap_or((0, 0));
        let elapsed_ms = start.elapsed().as_millis() as u64;

        info!(
            "LLM: {}ms, tokens: {}/{} (in/out)",
            elapsed_ms, input_tokens, output_tokens
        );

        Ok(LlmResponse {
            content,
            metrics: LlmMetrics { input_tokens, output_tokens, elapsed_ms },
        })
    }
}

//! Chat execution service - one gateway call, then formatting.

use tracing::debug;
use tutor_core::{AgentError, Content};
use tutor_llm::LlmGateway;

use super::format::format_response;

/// Instruction sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a helpful learning assistant. When responding:
1. Start with a concise, actionable insight or answer (max 2-3 sentences)
2. If providing steps, use numbered lists with bullet points
3. End with a brief motivational note
4. Keep language simple and encouraging
5. Format with clear sections using ** for emphasis
6. Make content scannable and easy to read"#;

/// Returns at most `max` characters of `text`.
pub fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the gateway contents for a prompt: the fixed instruction, then the prompt verbatim.
pub fn build_contents(prompt: &str) -> Vec<Content> {
    vec![Content::user(SYSTEM_INSTRUCTION), Content::user(prompt)]
}

/// Sends `prompt` to `model` and returns the formatted completion.
pub async fn complete_chat(
    gateway: &dyn LlmGateway,
    model: &str,
    prompt: &str,
) -> Result<String, AgentError> {
    let response = gateway.generate(model, &build_contents(prompt)).await?;
    debug!("Raw completion: {}...", preview(&response.content, 50));
    Ok(format_response(&response.content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tutor_core::ContentRole;
    use tutor_llm::{LlmMetrics, LlmResponse};

    struct Recording {
        reply: String,
        seen: Mutex<Vec<(String, Vec<Content>)>>,
    }

    #[async_trait]
    impl LlmGateway for Recording {
        async fn generate(&self, model: &str, contents: &[Content]) -> Result<LlmResponse, AgentError> {
            self.seen.lock().unwrap().push((model.to_string(), contents.to_vec()));
            Ok(LlmResponse { content: self.reply.clone(), metrics: LlmMetrics::default() })
        }
    }

    struct Failing;

    #[async_trait]
    impl LlmGateway for Failing {
        async fn generate(&self, _model: &str, _contents: &[Content]) -> Result<LlmResponse, AgentError> {
            Err(AgentError::LlmError("quota exceeded".into()))
        }
    }

    #[tokio::test]
    async fn sends_instruction_then_prompt_and_formats_reply() {
        let gateway = Recording {
            reply: "**Tip:** practice daily\n\n1. Start small".into(),
            seen: Mutex::new(Vec::new()),
        };

        let text = complete_chat(&gateway, "gemini-test", "  How do I learn Rust?  ").await.unwrap();
        assert_eq!(text, "Tip: practice daily | Start small");

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (model, contents) = &seen[0];
        assert_eq!(model, "gemini-test");
        assert_eq!(contents.len(), 2);
        assert!(contents.iter().all(|c| c.role == ContentRole::User));
        assert_eq!(contents[0].text(), SYSTEM_INSTRUCTION);
        assert_eq!(contents[1].text(), "  How do I learn Rust?  ");
    }

    #[tokio::test]
    async fn gateway_errors_propagate() {
        let err = complete_chat(&Failing, "gemini-test", "hi").await.unwrap_err();
        assert_eq!(err.to_string(), "LLM request failed: quota exceeded");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        assert_eq!(preview("héllo wörld", 4), "héll");
        assert_eq!(preview("short", 50), "short");
        assert_eq!(preview("", 3), "");
    }
}

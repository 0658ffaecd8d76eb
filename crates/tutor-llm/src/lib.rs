//! LLM gateway abstraction and the Gemini client behind it.
//!
//! - [`LlmGateway`] - Trait the server depends on, one call per completion
//! - [`GeminiClient`] - Google Gemini `generateContent` over HTTPS
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tutor_core::Content;
//! use tutor_llm::{GeminiClient, LlmGateway};
//!
//! let client = GeminiClient::new(api_key, None);
//! let response = client
//!     .generate("gemini-2.5-flash-lite", &[Content::user("Hello!")])
//!     .await?;
//! println!("{}", response.content);
//! ```

mod client;
mod gemini;

pub use client::{LlmGateway, LlmMetrics, LlmResponse};
pub use gemini::{GeminiClient, GEMINI_API_BASE};
pub use tutor_core::{AgentError, Content, ContentRole, Part};

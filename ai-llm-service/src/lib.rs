//! Shared LLM service for the copilot backend.
//!
//! Exposes the [`ChatCompletion`] seam consumed by the resolution pipeline,
//! its production OpenAI implementation, env-driven configuration, and the
//! unified error types.

use async_trait::async_trait;

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::{
    default_config::config_openai_chat, llm_model_config::LlmModelConfig,
    llm_provider::LlmProvider,
};
pub use error_handler::{AiLlmError, ConfigError, Provider, ProviderError, ProviderErrorKind};
pub use services::open_ai_service::OpenAiService;

/// Seam over a chat-completion backend.
///
/// The production implementation is [`OpenAiService`]; tests substitute fakes
/// so the pipeline can be exercised without network access.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send a single prompt (with an optional system message) and return the
    /// assistant's text.
    async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError>;
}

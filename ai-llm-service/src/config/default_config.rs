//! Default LLM configs loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`    = API key (mandatory)
//! - `OPENAI_MODEL`      = model id (default `gpt-4`)
//! - `OPENAI_URL`        = endpoint base (default `https://api.openai.com`)
//! - `LLM_MAX_TOKENS`    = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS`  = optional request timeout in seconds (u64)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, env_opt_u64, must_env},
};

/// Constructs the OpenAI chat config used by the resolution pipeline.
///
/// The API key is required here, so a missing or empty key fails at startup
/// rather than on the first request.
///
/// # Defaults
/// - `temperature = Some(0.7)`
/// - `timeout_secs = Some(60)` unless overridden
pub fn config_openai_chat() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let model = std::env::var("OPENAI_MODEL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "gpt-4".into());
    let endpoint = std::env::var("OPENAI_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "https://api.openai.com".into());
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    let max_tokens = match std::env::var("LLM_MAX_TOKENS") {
        Ok(v) if !v.trim().is_empty() => Some(v.parse::<u32>().map_err(|_| {
            crate::error_handler::ConfigError::InvalidNumber {
                var: "LLM_MAX_TOKENS",
                reason: "expected u32",
            }
        })?),
        _ => None,
    };

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.7),
        top_p: None,
        timeout_secs,
    })
}

use crate::config::llm_provider::LlmProvider;

/// Configuration for a chat-completion model invocation.
///
/// Fixed at startup; carries both general sampling parameters and
/// provider-specific ones (endpoint, API key).
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"gpt-4"`).
    pub model: String,

    /// Inference endpoint base URL (e.g., `https://api.openai.com`).
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic, higher = more random).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Request timeout in seconds (default 60 when unset).
    pub timeout_secs: Option<u64>,
}

/// Represents the provider (backend) used for chat completions.
///
/// Only OpenAI's API is wired up today; adding more providers (e.g., a local
/// Ollama runtime, Anthropic Claude) is done by extending this enum and
/// adding a matching service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI's chat completions API.
    OpenAI,
}

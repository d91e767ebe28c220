//! Typed error for the resolution-center crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    /// Requested user id is absent from the dataset. Client error.
    #[error("user {0} not found")]
    UserNotFound(i64),

    /// Errors from the backing dataset store.
    #[error("store error: {0}")]
    Store(#[from] dataset_store::errors::StoreError),

    /// Errors from the completion provider.
    #[error("LLM error: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),
}

use std::sync::Arc;

use ai_llm_service::{OpenAiService, config_openai_chat};
use dataset_store::JsonFileStore;
use resolution_center::ResolutionService;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The resolution pipeline, with its store and chat client injected.
    pub resolution: ResolutionService,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// Builds the flat-file store (`DB_PATH`) and the OpenAI chat client
    /// (`OPENAI_API_KEY` and friends). A missing or empty API key fails here,
    /// at startup, rather than on the first request.
    pub fn from_env() -> Result<Self, AppError> {
        let store = JsonFileStore::from_env();
        let chat_cfg = config_openai_chat().map_err(AppError::Config)?;
        let chat = OpenAiService::new(chat_cfg).map_err(AppError::Config)?;

        Ok(Self {
            resolution: ResolutionService::new(Arc::new(store), Arc::new(chat)),
        })
    }
}

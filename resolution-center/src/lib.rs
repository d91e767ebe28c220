//! Resolution pipeline: lookup → context → completion → response shaping.
//!
//! One public entry point, [`ResolutionService::resolve`]. It re-reads the
//! dataset from the injected store, finds the requesting user, builds prompt
//! context from the user record and the policy document, asks the injected
//! chat-completion backend, and wraps the answer into the fixed response
//! envelope.
//!
//! No state is retained across invocations; each request is fully
//! independent, so concurrent calls are safe.

use std::sync::Arc;

use tracing::{debug, info, instrument};

mod api_types;
mod error;
pub mod prompt;

pub use api_types::{AskRequest, ResolutionAnswer, VisualForm};
pub use error::ResolutionError;

use ai_llm_service::ChatCompletion;
use dataset_store::DatasetStore;

/// Orchestrates one inbound resolution request.
///
/// Collaborators are injected at construction, so tests substitute fakes
/// without touching process-wide state.
#[derive(Clone)]
pub struct ResolutionService {
    store: Arc<dyn DatasetStore>,
    chat: Arc<dyn ChatCompletion>,
}

impl ResolutionService {
    /// Build the service from its two collaborators.
    pub fn new(store: Arc<dyn DatasetStore>, chat: Arc<dyn ChatCompletion>) -> Self {
        Self { store, chat }
    }

    /// Answer one question for one user.
    ///
    /// Strict sequencing: read dataset → user lookup → build context → ask
    /// the model → shape the response. Each step depends on the prior one,
    /// and every failure propagates untouched; no partial results.
    ///
    /// # Errors
    /// - [`ResolutionError::Store`] if the dataset cannot be read or parsed.
    /// - [`ResolutionError::UserNotFound`] if `user_id` is absent; the
    ///   completion backend is never called in that case.
    /// - [`ResolutionError::Llm`] on any provider failure.
    #[instrument(skip_all, fields(user_id = req.user_id))]
    pub async fn resolve(&self, req: &AskRequest) -> Result<ResolutionAnswer, ResolutionError> {
        let dataset = self.store.read_dataset().await?;

        let user = dataset
            .find_user(req.user_id)
            .ok_or(ResolutionError::UserNotFound(req.user_id))?;

        let context = prompt::build_context(user, &dataset.policies);
        debug!(context_len = context.len(), "context built");

        let composed = prompt::compose_prompt(&req.question, &context);
        let text = self
            .chat
            .generate(&composed, Some(prompt::DEFAULT_SYSTEM))
            .await?;

        info!(answer_len = text.len(), "question resolved");

        Ok(ResolutionAnswer {
            text,
            visual_form: VisualForm::placeholder(),
        })
    }
}

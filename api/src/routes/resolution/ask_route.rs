//! POST /resolution/ask — answer one user question with policy context.

use std::sync::Arc;

use axum::{Json, extract::State};

use resolution_center::{AskRequest, ResolutionAnswer};

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Handler: POST /resolution/ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/resolution/ask \
///   -H 'content-type: application/json' \
///   -d '{"user_id":1,"question":"How do I get a refund?"}'
/// ```
pub async fn ask_resolution_center(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<Json<ResolutionAnswer>> {
    let answer = state.resolution.resolve(&body).await?;
    Ok(Json(answer))
}

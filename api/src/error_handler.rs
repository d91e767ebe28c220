use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use ai_llm_service::AiLlmError;
use dataset_store::errors::StoreError;
use resolution_center::ResolutionError;

/// Public application error type.
///
/// One variant per externally observable failure class; the HTTP status
/// mapping lives here and nowhere else.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Request / routing ---
    #[error("User not found")]
    UserNotFound,

    // --- Infrastructure ---
    #[error("dataset store unavailable")]
    StoreUnavailable(#[source] std::io::Error),

    #[error("dataset store corrupt")]
    StoreCorrupt(#[source] serde_json::Error),

    // --- External provider ---
    #[error("completion provider unreachable")]
    ProviderUnavailable(#[source] AiLlmError),

    #[error("completion provider error")]
    Provider(#[source] AiLlmError),

    // --- Boot / config ---
    #[error(transparent)]
    Config(AiLlmError),

    // --- IO / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::UserNotFound => StatusCode::NOT_FOUND,

            // 5xx, split by origin
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StoreCorrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ProviderUnavailable(_) | AppError::Provider(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Bind(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error body shape preserved from the service contract: `{"detail": ...}`.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Map pipeline failures onto HTTP-facing variants.
impl From<ResolutionError> for AppError {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::UserNotFound(_) => AppError::UserNotFound,
            ResolutionError::Store(StoreError::Unavailable(e)) => AppError::StoreUnavailable(e),
            ResolutionError::Store(StoreError::Corrupt(e)) => AppError::StoreCorrupt(e),
            ResolutionError::Llm(e @ AiLlmError::HttpTransport(_)) => {
                AppError::ProviderUnavailable(e)
            }
            ResolutionError::Llm(e) => AppError::Provider(e),
        }
    }
}

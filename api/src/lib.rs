use std::{env, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use axum::{Router, middleware, routing::post};
use tokio::signal;
use tracing::info;

use crate::{
    core::app_state::AppState, error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::resolution::ask_route::ask_resolution_center,
};

pub use crate::error_handler::AppResult;

/// Start the HTTP server and block until shutdown.
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8000".into());

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/resolution/ask", post(ask_resolution_center))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(%host_url, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}

//! HTTP surface of the question/upload backend.
//!
//! Routes:
//! - `POST /api/v1/ask`        — question answering via the completion provider
//! - `GET  /api/v1/questions`  — in-process question log
//! - `POST /api/v1/upload/pdf` — validated PDF upload
//! - `GET  /` and `GET /health` — liveness

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};

use crate::routes::{
    ask::ask_question_route::ask_question,
    basic_routes::{health, root},
    questions::list_questions_route::get_questions,
    upload::upload_pdf_route::upload_pdf,
};

/// Slack on top of the PDF ceiling for multipart framing overhead. A part
/// of exactly 10 MiB must reach the size validation instead of being cut
/// off by axum's body limit.
const UPLOAD_BODY_LIMIT: usize = pdf_store::MAX_PDF_BYTES as usize + 64 * 1024;

/// Builds the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let api_v1 = Router::new()
        .route("/ask", post(ask_question))
        .route("/questions", get(get_questions))
        .route(
            "/upload/pdf",
            post(upload_pdf).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        );

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", api_v1)
        .with_state(state)
}

/// Loads state from the environment, binds the listener, and serves until
/// Ctrl+C.
///
/// # Errors
/// [`AppError`] on fatal configuration problems (missing API key,
/// uncreatable upload directory) or bind/serve failures.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);
    let app = router(state);

    let addr = std::env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(AppError::Bind)?;
    info!(%addr, "API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}

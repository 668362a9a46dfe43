use std::sync::Arc;

use llm_client::{LlmConfig, OpenAiClient};
use pdf_store::PdfStore;
use qa_service::QuestionService;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Built once at startup and handed to the router behind an `Arc`. The
/// completion client inside `qa` is long-lived and shared; nothing here is
/// constructed per request.
pub struct AppState {
    /// Question answering service (owns the in-process question log).
    pub qa: QuestionService,
    /// Validated PDF persistence.
    pub pdfs: PdfStore,
}

impl AppState {
    /// Assemble state from already-built components. Used by tests to wire
    /// in stub providers and temporary storage roots.
    pub fn new(qa: QuestionService, pdfs: PdfStore) -> Self {
        Self { qa, pdfs }
    }

    /// Load shared state from environment variables.
    ///
    /// # Errors
    /// Fatal configuration problems only: a missing/blank `OPENAI_API_KEY`,
    /// an unbuildable HTTP client, or an uncreatable upload directory.
    pub fn from_env() -> Result<Self, AppError> {
        let cfg = LlmConfig::from_env()?;
        let provider = Arc::new(OpenAiClient::new(cfg).map_err(AppError::ClientInit)?);

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());
        let pdfs = PdfStore::new(upload_dir).map_err(AppError::StorageInit)?;

        Ok(Self {
            qa: QuestionService::new(provider),
            pdfs,
        })
    }
}

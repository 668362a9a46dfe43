//! POST /api/v1/ask — asks the completion provider.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /api/v1/ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/api/v1/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"What is FastAPI?","context":"Python web framework"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<Json<AskResponse>> {
    let out = state
        .qa
        .ask(&body.question, body.context.as_deref())
        .await?;

    Ok(Json(AskResponse {
        question: out.question,
        answer: out.answer,
        model: out.model,
    }))
}

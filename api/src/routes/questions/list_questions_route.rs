//! GET /api/v1/questions — full question log, in call order.

use std::sync::Arc;

use axum::{Json, extract::State};
use qa_service::QuestionRecord;

use crate::core::app_state::AppState;

/// Handler: GET /api/v1/questions
///
/// Returns a snapshot of every answered question since process start.
/// No pagination, no filtering; the log is volatile and process-scoped.
pub async fn get_questions(State(state): State<Arc<AppState>>) -> Json<Vec<QuestionRecord>> {
    Json(state.qa.list_all())
}

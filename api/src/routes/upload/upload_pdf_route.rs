//! POST /api/v1/upload/pdf — multipart PDF intake.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State},
    http::header,
};
use tracing::debug;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::upload::upload_response::PdfUploadResponse,
};

/// Handler: POST /api/v1/upload/pdf
///
/// Expects a multipart form with a `file` part. A part without a parsable
/// filename is a 422 — that boundary belongs to the transport layer, the
/// store itself only sees named files. Validation (extension, 10 MiB
/// ceiling) and persistence live in `pdf-store`.
pub async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> AppResult<Json<PdfUploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Failed to parse multipart data: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let Some(filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
        else {
            return Err(AppError::unprocessable("file part has no filename"));
        };

        // Advertised size, when the client sent one for the part. Absent or
        // zero falls through to the authoritative byte-length check.
        let declared_size = field
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read file content: {e}")))?;

        debug!(
            filename,
            declared_size,
            size_bytes = content.len(),
            "received PDF upload"
        );

        let stored = state.pdfs.store(&filename, declared_size, content).await?;

        return Ok(Json(PdfUploadResponse {
            file_id: stored.id,
            filename: stored.filename,
            message: "PDF uploaded successfully".to_string(),
        }));
    }

    Err(AppError::unprocessable(
        "multipart payload contains no `file` field",
    ))
}

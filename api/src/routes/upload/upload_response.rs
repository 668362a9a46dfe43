use serde::Serialize;

/// Response payload for /api/v1/upload/pdf.
#[derive(Debug, Serialize)]
pub struct PdfUploadResponse {
    /// Generated identifier of the stored artifact.
    pub file_id: String,
    /// The original filename, unmodified (not the on-disk name).
    pub filename: String,
    /// Human-friendly status line.
    pub message: String,
}

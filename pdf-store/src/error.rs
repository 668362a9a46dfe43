//! Typed error for the pdf-store crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// The filename does not end in `.pdf` (checked case-insensitively).
    #[error("Only PDF files are allowed")]
    NotPdf,

    /// Declared or actual size exceeds the 10 MiB ceiling.
    #[error("File size exceeds 10MB limit")]
    TooLarge,

    /// Local filesystem failure while creating the root or writing the
    /// artifact. The OS error text rides along for diagnosability.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Whether the caller can fix this by correcting the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, UploadError::NotPdf | UploadError::TooLarge)
    }
}

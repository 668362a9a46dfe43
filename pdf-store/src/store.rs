//! PDF storage under a configured root directory.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::UploadError;

/// Hard ceiling on accepted PDF payloads: 10 MiB.
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

/// One accepted upload. The record is not retained anywhere; the written
/// artifact on disk and the returned fields are the observable result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Freshly generated v4 UUID, canonical hyphenated form.
    pub id: String,
    /// The original filename, unmodified.
    pub filename: String,
    /// Full path of the written artifact (`{root}/{id}_{filename}`).
    pub stored_path: PathBuf,
    /// Actual byte length of the written content.
    pub size_bytes: u64,
}

/// Writes validated PDF uploads under a storage root.
///
/// Uniqueness of stored names rests entirely on the randomness of the v4
/// UUID; there is no check against existing files.
#[derive(Debug)]
pub struct PdfStore {
    root: PathBuf,
}

impl PdfStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    /// Creation is idempotent: an existing directory is not an error.
    ///
    /// # Errors
    /// [`UploadError::Io`] if the directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, UploadError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "PDF store ready");
        Ok(Self { root })
    }

    /// Root directory artifacts are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates and persists one upload.
    ///
    /// The size ceiling is enforced twice: against `declared_size` when the
    /// transport advertised one (cheap early rejection), and against the
    /// actual byte length (authoritative — an absent or understated declared
    /// size must not bypass the limit). Exactly [`MAX_PDF_BYTES`] passes.
    ///
    /// # Errors
    /// - [`UploadError::NotPdf`] for filenames not ending in `.pdf`
    /// - [`UploadError::TooLarge`] when either size check fails
    /// - [`UploadError::Io`] when the write fails
    pub async fn store(
        &self,
        filename: &str,
        declared_size: Option<u64>,
        content: Bytes,
    ) -> Result<UploadedFile, UploadError> {
        if !filename.to_ascii_lowercase().ends_with(".pdf") {
            warn!(filename, "rejected upload: not a PDF");
            return Err(UploadError::NotPdf);
        }

        if let Some(declared) = declared_size
            && declared > MAX_PDF_BYTES
        {
            warn!(filename, declared, "rejected upload: declared size over limit");
            return Err(UploadError::TooLarge);
        }

        let size_bytes = content.len() as u64;
        if size_bytes > MAX_PDF_BYTES {
            warn!(filename, size_bytes, "rejected upload: content over limit");
            return Err(UploadError::TooLarge);
        }

        let id = Uuid::new_v4().to_string();
        let stored_path = self.root.join(format!("{id}_{filename}"));

        tokio::fs::write(&stored_path, &content).await?;

        info!(
            file_id = %id,
            filename,
            size_bytes,
            path = %stored_path.display(),
            "PDF stored"
        );

        Ok(UploadedFile {
            id,
            filename: filename.to_string(),
            stored_path,
            size_bytes,
        })
    }
}

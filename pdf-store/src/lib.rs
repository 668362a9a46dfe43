//! Validated PDF persistence.
//!
//! [`PdfStore::store`] checks the extension and the 10 MiB size ceiling,
//! names the artifact `{uuid}_{original_filename}`, and writes it under a
//! configured root. No in-memory upload state is kept.

mod error;
mod store;

pub use error::UploadError;
pub use store::{MAX_PDF_BYTES, PdfStore, UploadedFile};

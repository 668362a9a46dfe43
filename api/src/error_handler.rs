use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pdf_store::UploadError;
use qa_service::QaError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(#[from] llm_client::ConfigError),

    #[error("failed to build completion client: {0}")]
    ClientInit(#[source] llm_client::LlmError),

    #[error("failed to prepare upload storage: {0}")]
    StorageInit(#[source] pdf_store::UploadError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::Config(_)
            | AppError::ClientInit(_)
            | AppError::StorageInit(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,

            AppError::Http { status, .. } => *status,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::ClientInit(_) => "CLIENT_INIT_ERROR",
            AppError::StorageInit(_) => "STORAGE_INIT_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::Http { code, .. } => code,
        }
    }

    /// 400 with a plain message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::Http {
            status: StatusCode::BAD_REQUEST,
            code: "BAD_REQUEST",
            message: message.into(),
        }
    }

    /// 422 for payloads the transport cannot make sense of.
    pub fn unprocessable(message: impl Into<String>) -> Self {
        AppError::Http {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            code: "UNPROCESSABLE_ENTITY",
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Map question-service failures to their HTTP shape. The upstream
/// diagnostic text rides along verbatim inside the 500 message.
impl From<QaError> for AppError {
    fn from(err: QaError) -> Self {
        match err {
            QaError::EmptyQuestion => AppError::bad_request(err.to_string()),
            QaError::Upstream(e) => AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "UPSTREAM_ERROR",
                message: format!("Failed to generate AI response: {e}"),
            },
        }
    }
}

/// Map upload failures: validation is client-correctable (400), local I/O
/// is a 500 that keeps the OS error text.
impl From<UploadError> for AppError {
    fn from(err: UploadError) -> Self {
        if err.is_validation() {
            AppError::bad_request(err.to_string())
        } else {
            AppError::Http {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                code: "STORAGE_ERROR",
                message: format!("Error uploading PDF: {err}"),
            }
        }
    }
}

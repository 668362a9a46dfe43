//! Typed error for the qa-service crate.

use llm_client::LlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// The question was empty or whitespace-only. Client-correctable.
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// The completion provider failed. The upstream diagnostic text is
    /// preserved verbatim; callers surface it, never swallow it.
    #[error(transparent)]
    Upstream(#[from] LlmError),
}

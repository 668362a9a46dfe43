//! Question answering with an in-process exchange log.
//!
//! Public API: [`QuestionService::ask`] and [`QuestionService::list_all`].
//! The completion backend is injected through
//! [`llm_client::CompletionProvider`], so tests run against stubs and
//! production wires in the shared `OpenAiClient`.

mod error;
mod log;
mod service;

pub use error::QaError;
pub use log::{QuestionLog, QuestionRecord};
pub use service::{QaAnswer, QuestionService};

//! Minimal OpenAI chat-completion client.
//!
//! - [`LlmConfig`] — env-driven configuration (API key required at startup).
//! - [`CompletionProvider`] — injectable seam over the concrete backend.
//! - [`OpenAiClient`] — long-lived `reqwest`-based client; construct once,
//!   wrap in `Arc`, and share across request handlers.

pub mod chat;
pub mod config;
pub mod error;
pub mod openai;

pub use chat::{ChatMessage, ChatRole, CompletionProvider};
pub use config::LlmConfig;
pub use error::{ConfigError, LlmError};
pub use openai::OpenAiClient;

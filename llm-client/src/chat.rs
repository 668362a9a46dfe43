//! Chat message types and the provider seam.

use async_trait::async_trait;

use crate::error::LlmError;

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Instruction/context message prepended to the conversation.
    System,
    /// The end user's message.
    User,
}

impl ChatRole {
    /// Wire name of the role, as the OpenAI API expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
        }
    }
}

/// One role-tagged text segment of a prompt sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Builds a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Seam between callers and the concrete completion backend.
///
/// Production wiring injects [`crate::openai::OpenAiClient`]; tests inject
/// stubs with canned answers or canned failures. A single call means a
/// single attempt — implementations must not retry internally.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Runs one non-streaming completion over `messages` and returns the
    /// generated text.
    ///
    /// # Errors
    /// Propagates the backend failure as [`LlmError`], preserving the
    /// upstream diagnostic text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Identifier of the model this provider generates with.
    fn model(&self) -> &str;
}

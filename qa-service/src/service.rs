//! Question answering service.
//!
//! Validates the question, builds the prompt sequence, delegates to the
//! injected [`CompletionProvider`], normalizes the answer, and records the
//! exchange in the owned [`QuestionLog`].

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use llm_client::{ChatMessage, CompletionProvider};

use crate::{
    error::QaError,
    log::{QuestionLog, QuestionRecord},
};

/// Result of a successful `ask` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaAnswer {
    /// The original question, untrimmed.
    pub question: String,
    /// The provider's text with leading/trailing whitespace stripped.
    pub answer: String,
    /// Identifier of the model that generated the answer.
    pub model: String,
}

/// Service wiring a completion provider to the question log.
///
/// Construct once at startup with a shared provider; the log is owned by
/// the service, so each instance (including test instances) starts empty.
pub struct QuestionService {
    provider: Arc<dyn CompletionProvider>,
    log: QuestionLog,
}

impl QuestionService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            log: QuestionLog::new(),
        }
    }

    /// Answers `question`, optionally grounding it with `context`.
    ///
    /// Exactly one log append happens per successful call; validation and
    /// upstream failures append nothing.
    ///
    /// # Errors
    /// - [`QaError::EmptyQuestion`] when the trimmed question is empty.
    ///   Checked before the provider is invoked.
    /// - [`QaError::Upstream`] when the provider fails; the upstream
    ///   diagnostic text is preserved verbatim.
    pub async fn ask(&self, question: &str, context: Option<&str>) -> Result<QaAnswer, QaError> {
        if question.trim().is_empty() {
            return Err(QaError::EmptyQuestion);
        }

        let started = Instant::now();
        let messages = build_messages(question, context);

        debug!(
            question_len = question.len(),
            has_context = messages.len() > 1,
            model = self.provider.model(),
            "dispatching question to completion provider"
        );

        let answer = self.provider.complete(&messages).await?;
        let answer = answer.trim().to_string();

        self.log.append(QuestionRecord {
            question: question.to_string(),
            answer: answer.clone(),
            context: context.map(ToOwned::to_owned),
        });

        info!(
            model = self.provider.model(),
            answer_len = answer.len(),
            latency_ms = started.elapsed().as_millis(),
            "question answered"
        );

        Ok(QaAnswer {
            question: question.to_string(),
            answer,
            model: self.provider.model().to_string(),
        })
    }

    /// Returns a snapshot of every answered question, in call order.
    pub fn list_all(&self) -> Vec<QuestionRecord> {
        self.log.snapshot()
    }
}

/// Builds the prompt sequence for one question.
///
/// A system message `"Context: " + context` is prepended only when context
/// is present and non-empty; `Some("")` behaves like `None`. The user
/// message carries the question untrimmed.
fn build_messages(question: &str, context: Option<&str>) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(2);
    if let Some(ctx) = context
        && !ctx.is_empty()
    {
        messages.push(ChatMessage::system(format!("Context: {ctx}")));
    }
    messages.push(ChatMessage::user(question));
    messages
}

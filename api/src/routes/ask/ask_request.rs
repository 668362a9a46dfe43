use serde::{Deserialize, Serialize};

/// Request payload for /api/v1/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Natural language question.
    pub question: String,
    /// Optional grounding context prepended as a system message.
    #[serde(default)]
    pub context: Option<String>,
}

/// Response payload for /api/v1/ask.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// The question as submitted, untrimmed.
    pub question: String,
    /// Final model answer (plain text, trimmed).
    pub answer: String,
    /// Identifier of the model that produced the answer.
    pub model: String,
}

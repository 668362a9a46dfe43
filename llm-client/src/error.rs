//! Unified error handling for `llm-client`.
//!
//! One top-level [`LlmError`] for the whole crate, with startup-time
//! configuration problems grouped in [`ConfigError`]. Upstream diagnostics
//! (HTTP status, response snippet, decode reason) are carried as data so
//! callers can surface the original text verbatim.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the crate.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Top-level error for the `llm-client` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Configuration/validation errors (startup only, fatal).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error (connect, timeout, TLS).
    #[error("transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The completion response carried no usable choices.
    #[error("empty `choices` in completion response")]
    EmptyChoices,
}

/// Error enum for environment-driven setup.
///
/// Raised only while building configuration at process startup; never
/// surfaced per-request.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// Value had the wrong format (e.g., invalid URL scheme).
    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `OPENAI_ENDPOINT`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`ConfigError::MissingVar`] if the variable is absent or blank.
pub fn must_env(name: &'static str) -> std::result::Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// Maximum length of upstream body snippets embedded in errors.
const SNIPPET_MAX: usize = 600;

/// Trims an upstream response body down to a loggable snippet.
pub fn make_snippet(body: &str) -> String {
    let t = body.trim();
    if t.len() <= SNIPPET_MAX {
        t.to_string()
    } else {
        let mut end = SNIPPET_MAX;
        while !t.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &t[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn must_env_rejects_blank() {
        // SAFETY: test-local variable, no concurrent readers of this name.
        unsafe { std::env::set_var("LLM_CLIENT_TEST_BLANK", "   ") };
        assert!(matches!(
            must_env("LLM_CLIENT_TEST_BLANK"),
            Err(ConfigError::MissingVar("LLM_CLIENT_TEST_BLANK"))
        ));
    }

    #[test]
    fn snippet_is_capped() {
        let long = "x".repeat(SNIPPET_MAX * 2);
        let s = make_snippet(&long);
        assert!(s.chars().count() <= SNIPPET_MAX + 1);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn snippet_keeps_short_bodies_verbatim() {
        assert_eq!(make_snippet("  rate limit exceeded \n"), "rate limit exceeded");
    }
}

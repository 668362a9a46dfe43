//! Client configuration for the completion endpoint.
//!
//! The API key is the only required input and is read from the environment
//! at startup. Sampling parameters are fixed constants: they are part of
//! the service contract, not user-controlled knobs.

use crate::error::{ConfigError, must_env};

/// Default chat model when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base when `OPENAI_ENDPOINT` is unset.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Maximum number of tokens requested per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Sampling temperature for every completion.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the OpenAI chat-completion client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier string (e.g., `"gpt-3.5-turbo"`).
    pub model: String,

    /// API base URL (scheme + host, no trailing path).
    pub endpoint: String,

    /// API key used as a bearer token.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Builds the config from environment variables.
    ///
    /// `OPENAI_API_KEY` is required and must be non-empty; everything else
    /// falls back to the defaults above.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingVar`] when the API key is absent or
    /// blank. This is fatal at startup, never raised per-request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = must_env("OPENAI_API_KEY")?;

        Ok(Self {
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            endpoint: std::env::var("OPENAI_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
            api_key,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }
}

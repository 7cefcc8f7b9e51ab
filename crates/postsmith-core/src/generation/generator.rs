//! Content generator trait.
//!
//! The generative-language-model API is an external collaborator. This trait
//! is the seam: the pipeline only distinguishes success with text, success
//! without text, and failure.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`ContentGenerator`].
///
/// These are for the diagnostic log. They may contain request details and
/// must never be shown to the end user verbatim.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No API key was configured.
    #[error("missing API key: {0}")]
    MissingApiKey(String),

    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Sends a prompt to a generative model.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates text for `prompt` with the given model identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(text))`: the model produced text
    /// - `Ok(None)`: the call succeeded but carried no text
    /// - `Err(GeneratorError)`: transport or API failure
    async fn generate(&self, model: &str, prompt: &str) -> Result<Option<String>, GeneratorError>;
}

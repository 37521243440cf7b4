//! AI-specific error types.

use showcase_core::ShowcaseError;
use thiserror::Error;

/// Errors specific to the Gemini transport.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// Credential rejected by the service.
    #[error("Invalid API key ({status}): {message}")]
    InvalidApiKey {
        status: u16,
        message: String,
    },
}

impl From<AiError> for ShowcaseError {
    fn from(e: AiError) -> Self {
        match e {
            AiError::HttpError(inner) => ShowcaseError::NetworkError(inner.to_string()),
            other => ShowcaseError::ProviderError(other.to_string()),
        }
    }
}

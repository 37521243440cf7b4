//! Error types for Showcase Core.

use thiserror::Error;

/// Result type alias for Showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;

/// Main error type for the Showcase crates.
///
/// None of these ever reach a presentation shell through the workflow; they
/// only show up in the diagnostic channel.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// AI provider returned an error.
    #[error("AI provider error: {0}")]
    ProviderError(String),

    /// Network request failed.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Timeout occurred.
    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),
}

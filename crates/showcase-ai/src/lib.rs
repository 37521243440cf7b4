//! # Showcase AI
//!
//! Text generation backends for the Showcase idea generator.
//!
//! - **Gemini**: Google Generative Language REST API
//!
//! ## Example
//!
//! ```rust,ignore
//! use showcase_ai::GeminiProvider;
//! use showcase_core::{IdeaWorkflow, ShowcaseConfig};
//!
//! let config = ShowcaseConfig::from_env();
//! let provider = GeminiProvider::new(&config)?;
//!
//! let workflow = IdeaWorkflow::new(provider, config.model.clone());
//! let idea = workflow.generate("Sustainable Living").await;
//! ```

pub mod gemini;
pub mod error;

pub use gemini::GeminiProvider;
pub use error::AiError;

/// Re-export core types for convenience.
pub use showcase_core::{
    TextGenerator, GenerationRequest, GenerationResponse, IdeaWorkflow,
    ShowcaseConfig, ShowcaseError, Result,
};

/// Create a Gemini provider from the environment with a single line.
///
/// # Example
///
/// ```rust,ignore
/// let provider = showcase_ai::gemini("gemini-3-flash-preview")?;
/// ```
pub fn gemini(model: &str) -> Result<GeminiProvider> {
    let config = ShowcaseConfig::from_env().with_model(model);
    GeminiProvider::new(&config)
}

//! # Showcase Core
//!
//! Core library behind the Showcase landing page.
//!
//! This crate holds the one piece of the site with behavior worth testing: the
//! idea-generation workflow that turns a topic into a prompt, calls a text
//! generation service once, and hands back either the generated text or a
//! fixed fallback message.
//!
//! ## Features
//!
//! - Deterministic prompt construction
//! - A narrow [`TextGenerator`] port for swapping the AI backend
//! - [`IdeaWorkflow`] that never surfaces errors to its caller
//! - [`IdeaSession`] holding the idle → loading → settled UI state
//! - Static landing-page content
//!
//! ## Example
//!
//! ```rust,ignore
//! use showcase_core::{IdeaSession, IdeaWorkflow};
//!
//! let workflow = IdeaWorkflow::new(provider, "gemini-3-flash-preview");
//! let session = IdeaSession::new(workflow);
//!
//! let outcome = session.submit("Music Education").await;
//! println!("{}", session.snapshot().response);
//! ```

pub mod error;
pub mod config;
pub mod provider;
pub mod prompt;
pub mod observer;
pub mod workflow;
pub mod session;
pub mod content;

pub use error::{ShowcaseError, Result};
pub use config::ShowcaseConfig;
pub use provider::{TextGenerator, GenerationRequest, GenerationResponse, MockProvider};
pub use observer::{WorkflowObserver, ObserverPtr};
pub use workflow::{IdeaWorkflow, FAILURE_MESSAGE, EMPTY_RESPONSE_MESSAGE};
pub use session::{IdeaSession, UiState, Phase, SubmitOutcome};
pub use content::{DeploymentStep, PageContent};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        TextGenerator, GenerationRequest, GenerationResponse,
        IdeaWorkflow, IdeaSession, UiState, Phase, SubmitOutcome,
        ShowcaseConfig, ShowcaseError, Result,
    };
}

//! Idea workflow - the single request/response adapter behind the widget.
//!
//! The workflow absorbs every error at its boundary: callers always get a
//! string back, either the generated text or one of two fixed messages.

use crate::{
    observer::ObserverPtr,
    prompt::{build_prompt, TEMPERATURE, TOP_P},
    provider::{GenerationRequest, TextGenerator},
};
use std::sync::Arc;
use tracing::{debug, error, instrument, Span};
use uuid::Uuid;

/// Returned when the service call fails for any reason.
pub const FAILURE_MESSAGE: &str =
    "Failed to generate idea. Please ensure your API_KEY is configured in the environment.";

/// Returned when the service answered without any text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response from AI.";

/// Turns a topic into a generated idea with exactly one provider call.
///
/// # Example
///
/// ```rust
/// use showcase_core::{IdeaWorkflow, MockProvider};
///
/// # tokio_test::block_on(async {
/// let provider = MockProvider::new().with_response("Music Education", "AppName: TuneUp");
/// let workflow = IdeaWorkflow::new(provider, "gemini-3-flash-preview");
///
/// assert_eq!(workflow.generate("Music Education").await, "AppName: TuneUp");
/// # });
/// ```
#[derive(Clone)]
pub struct IdeaWorkflow {
    /// The text generation backend.
    provider: Arc<dyn TextGenerator>,

    /// Model identifier sent with each request.
    model: String,

    /// Optional diagnostics observer.
    observer: Option<ObserverPtr>,
}

impl IdeaWorkflow {
    /// Create a workflow over the given provider.
    pub fn new<P: TextGenerator + 'static>(provider: P, model: impl Into<String>) -> Self {
        Self::from_shared(Arc::new(provider), model)
    }

    /// Create a workflow over an already shared provider.
    pub fn from_shared(provider: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            observer: None,
        }
    }

    /// Attach an observer.
    pub fn with_observer(mut self, observer: ObserverPtr) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Model identifier in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// The request that `generate` would send for this topic.
    pub fn request_for(&self, topic: &str) -> GenerationRequest {
        GenerationRequest {
            prompt: build_prompt(topic),
            model: self.model.clone(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }

    /// Generate an idea for `topic`.
    ///
    /// Callers must not pass an empty or whitespace-only topic; that check
    /// belongs to the shell.
    #[instrument(
        skip(self, topic),
        fields(provider = %self.provider.name(), generation_id = tracing::field::Empty)
    )]
    pub async fn generate(&self, topic: &str) -> String {
        let id = Uuid::new_v4().to_string();
        Span::current().record("generation_id", id.as_str());

        let request = self.request_for(topic);
        debug!("Requesting idea from {} ({})", self.provider.name(), self.model);

        if let Some(observer) = &self.observer {
            observer.on_start(&id, topic, &request.prompt);
        }

        match self.provider.generate(request).await {
            Ok(response) => {
                let text = match response.text {
                    Some(text) if !text.is_empty() => text,
                    _ => EMPTY_RESPONSE_MESSAGE.to_string(),
                };
                if let Some(observer) = &self.observer {
                    observer.on_success(&id, &text, response.tokens_used);
                }
                text
            }
            Err(e) => {
                error!(error = %e, "Gemini API Error");
                if let Some(observer) = &self.observer {
                    observer.on_failure(&id, topic, &e.to_string());
                }
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

impl std::fmt::Debug for IdeaWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeaWorkflow")
            .field("provider", &self.provider.name())
            .field("model", &self.model)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

//! Text generation port and request/response types.
//!
//! Defines the interface that AI backends must implement. The workflow only
//! ever sees this trait, so the concrete transport can be swapped for a test
//! double.

use crate::{Result, ShowcaseError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;

/// Request for a single text completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Fully constructed prompt text.
    pub prompt: String,

    /// Model identifier.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling top-p.
    pub top_p: f32,
}

/// Response from a text completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The generated text. `None` when the service returned no text field.
    pub text: Option<String>,

    /// Tokens used for the request, if reported.
    pub tokens_used: Option<u32>,
}

impl GenerationResponse {
    /// Create a response carrying text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            tokens_used: None,
        }
    }
}

/// Trait that text generation backends must implement.
///
/// One method, prompt in, text out or error.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Run one completion.
    ///
    /// # Arguments
    ///
    /// * `request` - Prompt and fixed sampling parameters
    ///
    /// # Returns
    ///
    /// The service response or an error.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Check if the provider is available and configured correctly.
    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}

/// Scripted reply for [`MockProvider`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text.
    Text(String),
    /// Succeed with no text field.
    NoText,
    /// Fail with a provider error carrying this message.
    Fail(String),
}

/// A mock provider for testing.
///
/// Replies are matched by substring against the prompt, first match wins.
#[derive(Debug)]
pub struct MockProvider {
    default_reply: MockReply,
    replies: Vec<(String, MockReply)>,
    delays: Vec<(String, Duration)>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            default_reply: MockReply::NoText,
            replies: Vec::new(),
            delays: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockProvider {
    /// Create a new mock provider that answers with no text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every prompt with this text unless a more specific reply matches.
    pub fn always(mut self, text: impl Into<String>) -> Self {
        self.default_reply = MockReply::Text(text.into());
        self
    }

    /// Fail every prompt unless a more specific reply matches.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.default_reply = MockReply::Fail(message.into());
        self
    }

    /// Add a mock reply for prompts containing `needle`.
    pub fn with_response(mut self, needle: impl Into<String>, text: impl Into<String>) -> Self {
        self.replies.push((needle.into(), MockReply::Text(text.into())));
        self
    }

    /// Add an arbitrary scripted reply for prompts containing `needle`.
    pub fn with_reply(mut self, needle: impl Into<String>, reply: MockReply) -> Self {
        self.replies.push((needle.into(), reply));
        self
    }

    /// Delay replies to prompts containing `needle`.
    pub fn with_delay(mut self, needle: impl Into<String>, delay: Duration) -> Self {
        self.delays.push((needle.into(), delay));
        self
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    fn reply_for(&self, prompt: &str) -> MockReply {
        self.replies
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| self.default_reply.clone())
    }

    fn delay_for(&self, prompt: &str) -> Option<Duration> {
        self.delays
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, delay)| *delay)
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay_for(&request.prompt) {
            tokio::time::sleep(delay).await;
        }

        match self.reply_for(&request.prompt) {
            MockReply::Text(text) => Ok(GenerationResponse {
                text: Some(text),
                tokens_used: Some(10),
            }),
            MockReply::NoText => Ok(GenerationResponse::default()),
            MockReply::Fail(message) => Err(ShowcaseError::ProviderError(message)),
        }
    }
}

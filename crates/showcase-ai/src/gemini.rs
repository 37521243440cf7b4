//! Google Gemini provider implementation.
//!
//! Talks to the `generateContent` REST endpoint with a single user turn.

use crate::error::AiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use showcase_core::{
    GenerationRequest, GenerationResponse, Result, ShowcaseConfig, ShowcaseError, TextGenerator,
};
use tracing::{debug, instrument};

/// Google Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout_seconds: Option<u64>,
}

// Request structures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

// Response structures
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    total_token_count: Option<u32>,
}

impl GeminiResponse {
    /// Text of the first candidate, thought parts excluded.
    fn text(&self) -> Option<String> {
        let parts = &self
            .candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts;

        let mut texts = parts
            .iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text.as_deref())
            .peekable();

        texts.peek()?;
        Some(texts.collect())
    }
}

impl GeminiProvider {
    /// Create a new Gemini provider from the shared configuration.
    pub fn new(config: &ShowcaseConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(timeout));
        }
        let client = builder
            .build()
            .map_err(|e| ShowcaseError::NetworkError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Create a provider from environment variables.
    ///
    /// Reads `API_KEY` and the `SHOWCASE_*` overrides.
    pub fn from_env() -> Result<Self> {
        Self::new(&ShowcaseConfig::from_env())
    }

    fn endpoint(&self, model: &str, action: Option<&str>) -> String {
        // The key travels as a query parameter, not a header.
        match action {
            Some(action) => format!("{}/{}:{}?key={}", self.base_url, model, action, self.api_key),
            None => format!("{}/{}?key={}", self.base_url, model, self.api_key),
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ShowcaseError {
        match self.timeout_seconds {
            Some(secs) if e.is_timeout() => ShowcaseError::Timeout(secs),
            _ => AiError::HttpError(e).into(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        debug!("Generating text with Gemini");

        let api_request = GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: request.prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
                top_p: request.top_p,
            },
        };

        let response = self
            .client
            .post(self.endpoint(&request.model, Some("generateContent")))
            .header("Content-Type", "application/json")
            .json(&api_request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = match status.as_u16() {
                401 | 403 => AiError::InvalidApiKey {
                    status: status.as_u16(),
                    message: body,
                },
                code => AiError::ApiError {
                    status: code,
                    message: body,
                },
            };
            return Err(error.into());
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let gemini_response: GeminiResponse = serde_json::from_str(&body)?;

        let text = gemini_response.text();
        debug!("Gemini returned {} bytes of text", text.as_ref().map_or(0, String::len));

        Ok(GenerationResponse {
            text,
            tokens_used: gemini_response
                .usage_metadata
                .and_then(|u| u.total_token_count),
        })
    }

    async fn health_check(&self) -> Result<bool> {
        // Minimal check - fetch the configured model's metadata
        let url = self.endpoint(&self.model, None);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(response.status().is_success())
    }
}

//! # Showcase Configuration
//!
//! Process-wide settings for the Showcase shells. The shells read this once at
//! startup and inject the pieces into the provider and workflow, so nothing
//! below the shell touches the environment.

use std::env;

/// Default Gemini model used by the idea generator.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Gemini REST endpoint (model name is appended).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default port for the web shell.
pub const DEFAULT_PORT: u16 = 3000;

/// Global configuration for the Showcase site.
///
/// # Example
/// ```rust
/// use showcase_core::ShowcaseConfig;
///
/// // Load from environment
/// let config = ShowcaseConfig::from_env();
///
/// // Or customize
/// let config = ShowcaseConfig::default()
///     .with_api_key("secret")
///     .with_port(8080);
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    /// API key for the generation service.
    /// Default: empty string, Env: API_KEY
    pub api_key: String,

    /// Model identifier.
    /// Default: "gemini-3-flash-preview", Env: SHOWCASE_MODEL
    pub model: String,

    /// Base URL of the generation service.
    /// Env: SHOWCASE_BASE_URL
    pub base_url: String,

    /// Client timeout in seconds. None leaves the transport default in place.
    /// Env: SHOWCASE_TIMEOUT_SECS
    pub timeout_seconds: Option<u64>,

    /// Port for the web shell.
    /// Default: 3000, Env: SHOWCASE_PORT
    pub port: u16,

    /// Reject submissions while one is already pending.
    /// Default: false, Env: SHOWCASE_GUARD=true
    pub in_flight_guard: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            port: DEFAULT_PORT,
            in_flight_guard: false,
        }
    }
}

impl ShowcaseConfig {
    /// Create a new config from environment variables.
    /// Falls back to defaults for missing or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // A missing key is not an error: the call goes out with an empty key
        // and fails upstream.
        if let Some(v) = lookup("API_KEY") {
            config.api_key = v;
        }
        if let Some(v) = lookup("SHOWCASE_MODEL") {
            if !v.trim().is_empty() {
                config.model = v;
            }
        }
        if let Some(v) = lookup("SHOWCASE_BASE_URL") {
            if !v.trim().is_empty() {
                config.base_url = v.trim_end_matches('/').to_string();
            }
        }
        if let Some(v) = lookup("SHOWCASE_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                config.timeout_seconds = Some(n);
            }
        }
        if let Some(v) = lookup("SHOWCASE_PORT") {
            if let Ok(n) = v.parse() {
                config.port = n;
            }
        }
        if let Some(v) = lookup("SHOWCASE_GUARD") {
            config.in_flight_guard = v.to_lowercase() == "true" || v == "1";
        }

        config
    }

    /// Builder: Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Builder: Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder: Set the service base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder: Set a client timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Builder: Set the web shell port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Builder: Enable or disable the in-flight guard.
    pub fn with_in_flight_guard(mut self, enabled: bool) -> Self {
        self.in_flight_guard = enabled;
        self
    }

    /// Whether an API key has been configured at all.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.api_key, "");
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.port, 3000);
        assert!(config.timeout_seconds.is_none());
        assert!(!config.in_flight_guard);
    }

    #[test]
    fn test_missing_key_is_empty_not_error() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[]));
        assert!(!config.has_api_key());
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[
            ("API_KEY", "abc123"),
            ("SHOWCASE_MODEL", "gemini-2.5-pro"),
            ("SHOWCASE_BASE_URL", "http://localhost:9000/models/"),
            ("SHOWCASE_TIMEOUT_SECS", "15"),
            ("SHOWCASE_PORT", "8080"),
            ("SHOWCASE_GUARD", "TRUE"),
        ]));

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:9000/models");
        assert_eq!(config.timeout_seconds, Some(15));
        assert_eq!(config.port, 8080);
        assert!(config.in_flight_guard);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[
            ("SHOWCASE_PORT", "not-a-port"),
            ("SHOWCASE_TIMEOUT_SECS", "soon"),
            ("SHOWCASE_MODEL", "   "),
        ]));

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.timeout_seconds.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ShowcaseConfig::default()
            .with_api_key("k")
            .with_model("m")
            .with_timeout(5)
            .with_in_flight_guard(true);

        assert!(config.has_api_key());
        assert_eq!(config.model, "m");
        assert_eq!(config.timeout_seconds, Some(5));
        assert!(config.in_flight_guard);
    }
}

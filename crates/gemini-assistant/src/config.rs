//! Configuration for GeminiAssistant.

use assistant_core::{AssistantError, FallbackMessages};
use std::env;

/// Environment variables searched for the API key, in order.
pub const DEFAULT_API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Configuration for GeminiAssistant.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Generative Language API base URL.
    pub api_url: String,

    /// Explicit API key. When unset the key is read from the environment
    /// on every call.
    pub api_key: Option<String>,

    /// Environment variables checked for the API key when `api_key` is unset.
    pub api_key_vars: Vec<String>,

    /// Model name to use.
    pub model: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum tokens for the completion.
    pub max_output_tokens: Option<u32>,

    /// HTTP timeout per request, in seconds.
    pub timeout_secs: u64,

    /// Number of past turns sent with each request (0 sends everything).
    pub max_history_turns: usize,

    /// Texts used when no completion is available.
    pub fallbacks: FallbackMessages,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
            api_key_vars: DEFAULT_API_KEY_VARS.iter().map(|v| v.to_string()).collect(),
            model: "gemini-2.5-flash".to_string(),
            temperature: None,
            max_output_tokens: None,
            timeout_secs: 60,
            max_history_turns: 20,
            fallbacks: FallbackMessages::default(),
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// The API key is deliberately not read here; see
    /// [`resolve_api_key`](Self::resolve_api_key).
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)
    /// - `GEMINI_TEMPERATURE` - Temperature (default: model default)
    /// - `GEMINI_MAX_OUTPUT_TOKENS` - Max completion tokens (default: model default)
    /// - `GEMINI_TIMEOUT_SECS` - HTTP timeout (default: 60)
    /// - `GEMINI_MAX_HISTORY_TURNS` - Turns sent per request (default: 20, 0 = all)
    pub fn from_env() -> Result<Self, AssistantError> {
        let defaults = Self::default();

        let api_url = env::var("GEMINI_API_URL").unwrap_or(defaults.api_url);
        if api_url.trim().is_empty() {
            return Err(AssistantError::Configuration(
                "GEMINI_API_URL is empty".to_string(),
            ));
        }

        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_output_tokens = env::var("GEMINI_MAX_OUTPUT_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_secs);
        if timeout_secs == 0 {
            return Err(AssistantError::Configuration(
                "GEMINI_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        let max_history_turns = env::var("GEMINI_MAX_HISTORY_TURNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_history_turns);

        Ok(Self {
            api_url,
            model,
            temperature,
            max_output_tokens,
            timeout_secs,
            max_history_turns,
            ..defaults
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// The API key to use right now, if any.
    ///
    /// An explicit key wins; otherwise the configured environment variables
    /// are read in order. Blank values count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }

        self.api_key_vars
            .iter()
            .filter_map(|var| env::var(var).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }

    /// Endpoint for a non-streamed completion.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set an explicit API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Read the API key from this environment variable only.
    pub fn api_key_var(mut self, var: impl Into<String>) -> Self {
        self.config.api_key_vars = vec![var.into()];
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max output tokens.
    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.config.max_output_tokens = Some(tokens);
        self
    }

    /// Set the HTTP timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the number of past turns sent per request.
    pub fn max_history_turns(mut self, turns: usize) -> Self {
        self.config.max_history_turns = turns;
        self
    }

    /// Override the fallback texts.
    pub fn fallbacks(mut self, fallbacks: FallbackMessages) -> Self {
        self.config.fallbacks = fallbacks;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}

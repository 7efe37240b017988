//! GeminiAssistant implementation using the Generative Language API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use assistant_core::{
    async_trait, forwardable, hash_prompt, window, Assistant, AssistantError, ChatMessage,
    FallbackMessages, GatewayOutcome,
};
use catalog::Catalog;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;
use crate::prompt::build_system_prompt;

/// Why a single completion request failed.
#[derive(Debug, Error)]
enum CallError {
    #[error("request failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Status { status: StatusCode, message: String },

    #[error("failed to parse response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The storefront's gateway to a hosted Gemini model.
///
/// Holds a system prompt built once from the catalog. Each call sends that
/// prompt, the forwarded history and the new message, and reports the result
/// as a [`GatewayOutcome`]. Nothing is retried.
pub struct GeminiAssistant {
    client: Client,
    config: GeminiConfig,
    system_prompt: String,
    system_prompt_hash: String,
    requests_sent: AtomicUsize,
}

impl GeminiAssistant {
    /// Create a new GeminiAssistant with the given configuration and catalog.
    pub fn new(config: GeminiConfig, catalog: &Catalog) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistantError::Client(format!("Failed to create HTTP client: {}", e)))?;

        let system_prompt = build_system_prompt(&catalog.context());
        let system_prompt_hash = hash_prompt(&system_prompt);

        info!("GeminiAssistant system prompt fingerprint: {}", system_prompt_hash);
        info!(
            "GeminiAssistant initialized with model: {}, products in context: {}, history window: {}",
            config.model,
            catalog.len(),
            config.max_history_turns
        );
        if config.resolve_api_key().is_none() {
            warn!("No Gemini API key configured; replies will use the offline notice");
        }

        Ok(Self {
            client,
            config,
            system_prompt,
            system_prompt_hash,
            requests_sent: AtomicUsize::new(0),
        })
    }

    /// Create a GeminiAssistant from environment variables.
    ///
    /// See [`GeminiConfig::from_env`]. A missing API key is not an error.
    pub fn from_env(catalog: &Catalog) -> Result<Self, AssistantError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config, catalog)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// The system prompt sent with every request.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// SHA-256 fingerprint of the system prompt.
    pub fn system_prompt_hash(&self) -> &str {
        &self.system_prompt_hash
    }

    /// Number of HTTP requests attempted so far.
    pub fn requests_sent(&self) -> usize {
        self.requests_sent.load(Ordering::SeqCst)
    }

    /// Build the request body for one turn.
    pub fn build_request(&self, history: &[ChatMessage], message: &str) -> GenerateContentRequest {
        let forwarded = forwardable(history);
        let windowed = window(forwarded, self.config.max_history_turns);
        if windowed.len() < forwarded.len() {
            debug!(
                "Trimmed request history from {} to {} messages",
                forwarded.len(),
                windowed.len()
            );
        }

        let mut contents: Vec<Content> = windowed
            .iter()
            .map(|msg| Content::with_role(msg.role.as_str(), msg.text.clone()))
            .collect();
        contents.push(Content::user(message));

        GenerateContentRequest {
            system_instruction: Content::system(self.system_prompt.clone()),
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            }
            .non_empty(),
        }
    }

    /// Send one completion request.
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, CallError> {
        let url = self.config.endpoint();
        debug!(
            "Sending request to {} with {} contents",
            url,
            request.contents.len()
        );

        self.requests_sent.fetch_add(1, Ordering::SeqCst);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(CallError::Send)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            return Err(CallError::Status { status, message });
        }

        let completion: GenerateContentResponse =
            response.json().await.map_err(CallError::Decode)?;

        if let Some(ref usage) = completion.usage_metadata {
            debug!(
                "Token usage - prompt: {:?}, completion: {:?}, total: {:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(completion)
    }
}

#[async_trait]
impl Assistant for GeminiAssistant {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> GatewayOutcome {
        let Some(api_key) = self.config.resolve_api_key() else {
            error!("Gemini API key is missing; answering offline");
            return GatewayOutcome::MissingCredential;
        };

        let request = self.build_request(history, message);

        match self.generate(&api_key, &request).await {
            Ok(completion) => match completion.text() {
                Some(text) => {
                    info!("Gemini reply received ({} chars)", text.len());
                    GatewayOutcome::Reply(text)
                }
                None => {
                    let finish_reason = completion
                        .candidates
                        .first()
                        .and_then(|c| c.finish_reason.as_deref());
                    let block_reason = completion
                        .prompt_feedback
                        .as_ref()
                        .and_then(|f| f.block_reason.as_deref());
                    warn!(
                        ?finish_reason,
                        ?block_reason,
                        "Gemini returned no text, using fallback"
                    );
                    GatewayOutcome::EmptyCompletion
                }
            },
            Err(e) => {
                error!("Gemini API error: {}", e);
                GatewayOutcome::NetworkError(e.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "GeminiAssistant"
    }

    fn fallbacks(&self) -> FallbackMessages {
        self.config.fallbacks.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_core::Role;

    fn assistant(max_history_turns: usize) -> GeminiAssistant {
        let config = GeminiConfig::builder()
            .api_key("test-key")
            .max_history_turns(max_history_turns)
            .build();
        GeminiAssistant::new(config, &Catalog::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_assistant_name() {
        assert_eq!(assistant(0).name(), "GeminiAssistant");
    }

    #[test]
    fn test_prompt_hash_matches_prompt() {
        let gateway = assistant(0);
        assert_eq!(gateway.system_prompt_hash(), hash_prompt(gateway.system_prompt()));
        assert!(gateway.system_prompt().contains("ID: tr-001"));
    }

    #[test]
    fn test_build_request_appends_new_message() {
        let gateway = assistant(0);
        let history = vec![
            ChatMessage::user("Who played on Kind of Blue?"),
            ChatMessage::model("Coltrane, Cannonball, Evans..."),
        ];

        let request = gateway.build_request(&history, "Is it in stock?");
        assert_eq!(request.contents.len(), 3);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
        assert_eq!(request.contents[1].role.as_deref(), Some("model"));
        assert_eq!(request.contents[2].joined_text(), "Is it in stock?");
        assert!(request.system_instruction.role.is_none());
        assert!(request.generation_config.is_none());
    }

    #[test]
    fn test_build_request_skips_greeting() {
        let gateway = assistant(0);
        let history = vec![ChatMessage::new(Role::Model, "Greetings!")];

        let request = gateway.build_request(&history, "hello");
        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].role.as_deref(), Some("user"));
    }

    #[test]
    fn test_build_request_applies_window() {
        let gateway = assistant(1);
        let history = vec![
            ChatMessage::user("one"),
            ChatMessage::model("1"),
            ChatMessage::user("two"),
            ChatMessage::model("2"),
        ];

        let request = gateway.build_request(&history, "three");
        let texts: Vec<_> = request.contents.iter().map(|c| c.joined_text()).collect();
        assert_eq!(texts, vec!["two", "2", "three"]);
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let config = GeminiConfig::builder()
            .api_key_var("SPIN_TEST_NEVER_SET_GEMINI_KEY")
            .api_url("http://127.0.0.1:9")
            .build();
        let gateway = GeminiAssistant::new(config, &Catalog::builtin().unwrap()).unwrap();

        let outcome = gateway.respond(&[], "Do you have Kind of Blue?").await;
        assert_eq!(outcome, GatewayOutcome::MissingCredential);
        assert_eq!(gateway.requests_sent(), 0);
    }
}

//! Generative Language API request and response types.

use serde::{Deserialize, Serialize};

/// A piece of message content. Only text parts are produced or read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Text payload (absent for non-text parts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// A message in the `contents` array or the system instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Role: "user" or "model" (omitted for the system instruction)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Message parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a single-part message with a role.
    pub fn with_role(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![Part::text(text)],
        }
    }

    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    /// Create a role-less system instruction.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }

    /// Concatenated text of every part.
    pub fn joined_text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Sampling options.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }

    /// `None` when nothing is overridden.
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

/// `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Fixed system prompt
    pub system_instruction: Content,
    /// Prior history followed by the new user message
    pub contents: Vec<Content>,
    /// Sampling options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token usage
    pub usage_metadata: Option<UsageMetadata>,
    /// Prompt-level feedback (set when the prompt was blocked)
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, or `None` when it is missing or blank.
    pub fn text(&self) -> Option<String> {
        let text = self.candidates.first()?.content.as_ref()?.joined_text();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content (absent when blocked)
    pub content: Option<Content>,
    /// Finish reason
    pub finish_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Prompt tokens
    pub prompt_token_count: Option<u32>,
    /// Completion tokens
    pub candidates_token_count: Option<u32>,
    /// Total tokens
    pub total_token_count: Option<u32>,
}

/// Prompt feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was
    pub block_reason: Option<String>,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// HTTP status code
    pub code: Option<u16>,
    /// Error message
    pub message: String,
    /// Status name, e.g. "INVALID_ARGUMENT"
    pub status: Option<String>,
}

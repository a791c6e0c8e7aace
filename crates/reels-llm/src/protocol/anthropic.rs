//! Anthropic Messages API wire format types

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::types::CompletionRequest;

/// Anthropic requires `max_tokens`; used when the caller leaves it unset
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic messages API request
#[derive(Debug, Clone, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    /// System prompt is top-level, not a message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: &'static str,
    pub content: String,
}

impl AnthropicRequest {
    pub fn new(model: &str, top_p: Option<f64>, request: &CompletionRequest) -> Self {
        Self {
            model: model.to_owned(),
            max_tokens: request.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            system: request.system.clone(),
            messages: vec![AnthropicMessage {
                role: "user",
                content: request.prompt.clone(),
            }],
            // Anthropic caps temperature at 1.0
            temperature: request.temperature.map(|t| t.min(1.0)),
            top_p,
        }
    }
}

/// Anthropic messages API response
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
}

/// Response content block; only text blocks carry completion text
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

impl AnthropicResponse {
    /// Concatenated text of every text block
    pub fn into_text(self) -> Result<String, LlmError> {
        let text: String = self
            .content
            .into_iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text),
                AnthropicContentBlock::Other => None,
            })
            .collect();

        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse("response has no text blocks".to_owned()));
        }

        Ok(text)
    }
}

//! `OpenAI` chat completion API wire format types

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::types::CompletionRequest;

// -- Request types --

/// `OpenAI` chat completion request
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiRequest {
    pub model: String,
    pub messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Request message, always plain text here
#[derive(Debug, Clone, Serialize)]
pub struct OpenAiMessage {
    pub role: &'static str,
    pub content: String,
}

impl OpenAiRequest {
    /// Build the wire request for a configured model
    pub fn new(model: &str, top_p: Option<f64>, request: &CompletionRequest) -> Self {
        let mut messages = Vec::with_capacity(2);

        if let Some(system) = &request.system {
            messages.push(OpenAiMessage {
                role: "system",
                content: system.clone(),
            });
        }

        messages.push(OpenAiMessage {
            role: "user",
            content: request.prompt.clone(),
        });

        Self {
            model: model.to_owned(),
            messages,
            temperature: request.temperature,
            top_p,
            max_tokens: request.max_tokens,
        }
    }
}

// -- Response types --

/// `OpenAI` chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiChoice {
    pub message: OpenAiResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiResponseMessage {
    #[serde(default)]
    pub content: Option<OpenAiContent>,
}

/// Content can be a string or an array of content parts
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OpenAiContent {
    Text(String),
    Parts(Vec<OpenAiContentPart>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl OpenAiResponse {
    /// Text of the first choice
    pub fn into_text(self) -> Result<String, LlmError> {
        let content = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("response contained no choices".to_owned()))?
            .message
            .content;

        let text = match content {
            Some(OpenAiContent::Text(text)) => text,
            Some(OpenAiContent::Parts(parts)) => parts.into_iter().filter_map(|part| part.text).collect(),
            None => String::new(),
        };

        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse("first choice has no text content".to_owned()));
        }

        Ok(text)
    }
}

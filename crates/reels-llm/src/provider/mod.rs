//! Provider trait and implementations for LLM backends

pub mod anthropic;
pub mod openai;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompletionRequest, CompletionResponse};

/// Trait implemented by each LLM provider backend
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Configured provider name
    fn name(&self) -> &str;

    /// Send a single non-streaming completion request
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

/// Read an error body for logging, tolerating unreadable bodies
pub(crate) async fn error_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_else(|_| "Unknown error".to_string())
}

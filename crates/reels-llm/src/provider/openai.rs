//! OpenAI-compatible provider implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use reels_config::LlmProviderConfig;
use url::Url;

use super::{LlmProvider, error_body};
use crate::error::{LlmError, Result};
use crate::http_client::http_client;
use crate::protocol::openai::{OpenAiRequest, OpenAiResponse};
use crate::types::{CompletionRequest, CompletionResponse};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible chat completions provider
///
/// Also serves third-party APIs that speak the same protocol, such as
/// NVIDIA NIM at `https://integrate.api.nvidia.com/v1`.
pub struct OpenAiProvider {
    name: String,
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    top_p: Option<f64>,
}

impl OpenAiProvider {
    /// Create from provider configuration
    pub fn new(name: String, config: &LlmProviderConfig) -> Self {
        let base_url = config
            .base_url
            .as_ref()
            .map_or(DEFAULT_BASE_URL, Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Self {
            name,
            client: http_client(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            top_p: config.top_p,
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let wire_request = OpenAiRequest::new(&self.model, self.top_p, request);

        tracing::debug!(
            provider = %self.name,
            model = %self.model,
            prompt_len = request.prompt.len(),
            "sending chat completion request"
        );

        let mut builder = self.client.post(self.completions_url()).json(&wire_request);

        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "upstream request failed");
            LlmError::Connection(e.to_string())
        })?;

        let status = response.status();

        if !status.is_success() {
            let body = error_body(response).await;
            tracing::warn!(provider = %self.name, status = %status, "upstream returned error");
            return Err(LlmError::from_status(status, body));
        }

        let wire_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        let model = wire_response.model.clone().unwrap_or_else(|| self.model.clone());
        let text = wire_response.into_text()?;

        Ok(CompletionResponse { text, model })
    }
}

//! Anthropic Messages API provider implementation

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use reels_config::LlmProviderConfig;
use url::Url;

use super::{LlmProvider, error_body};
use crate::error::{LlmError, Result};
use crate::http_client::http_client;
use crate::protocol::anthropic::{AnthropicRequest, AnthropicResponse};
use crate::types::{CompletionRequest, CompletionResponse};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    name: String,
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    top_p: Option<f64>,
}

impl AnthropicProvider {
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
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let wire_request = AnthropicRequest::new(&self.model, self.top_p, request);

        tracing::debug!(provider = %self.name, model = %self.model, "sending messages request");

        let mut builder = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&wire_request);

        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key.expose_secret());
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

        let wire_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        let model = wire_response.model.clone().unwrap_or_else(|| self.model.clone());
        let text = wire_response.into_text()?;

        Ok(CompletionResponse { text, model })
    }
}

#[cfg(test)]
mod tests {
    use reels_config::LlmProviderType;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn sends_version_and_key_headers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("x-api-key", "ant-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": [{"type": "text", "text": "A short script."}]
            })))
            .mount(&server)
            .await;

        let config = LlmProviderConfig {
            provider_type: LlmProviderType::Anthropic,
            api_key: Some(SecretString::from("ant-key")),
            base_url: Some(server.uri().parse().unwrap()),
            model: "claude-sonnet".to_owned(),
            top_p: None,
        };
        let provider = AnthropicProvider::new("anthropic".to_owned(), &config);

        let response = provider.complete(&CompletionRequest::new("script")).await.unwrap();
        assert_eq!(response.text, "A short script.");
        assert_eq!(response.model, "claude-sonnet");
    }
}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ImageGenProvider;
use crate::{
    error::{ImageGenError, Result},
    http_client::http_client,
    types::GeneratedImage,
};

/// Default `OpenAI` API base URL
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` image generation provider
pub(crate) struct OpenAiImageGenProvider {
    name: String,
    client: Client,
    api_key: SecretString,
    base_url: String,
    settings: ImageSettings,
}

/// Per-provider request settings with DALL-E 3 defaults
struct ImageSettings {
    model: String,
    size: String,
    quality: String,
    style: String,
    response_format: String,
}

impl ImageSettings {
    fn from_config(config: &reels_config::ImageGenProviderConfig) -> Self {
        Self {
            model: config.model.clone().unwrap_or_else(|| "dall-e-3".to_string()),
            size: config.size.clone().unwrap_or_else(|| "1024x1024".to_string()),
            quality: config.quality.clone().unwrap_or_else(|| "standard".to_string()),
            style: config.style.clone().unwrap_or_else(|| "natural".to_string()),
            response_format: config.response_format.clone().unwrap_or_else(|| "url".to_string()),
        }
    }
}

impl OpenAiImageGenProvider {
    /// Create a new `OpenAI` image generation provider
    pub fn new(name: String, api_key: SecretString, config: &reels_config::ImageGenProviderConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            name,
            client: http_client(),
            api_key,
            base_url,
            settings: ImageSettings::from_config(config),
        }
    }
}

/// Wire format for the `OpenAI` image generation API request
#[derive(Serialize)]
struct OpenAiImageRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
    style: &'a str,
    response_format: &'a str,
}

/// Wire format for the `OpenAI` image generation API response
#[derive(Deserialize)]
struct OpenAiImageResponse {
    #[serde(default)]
    data: Vec<OpenAiImageData>,
}

#[derive(Deserialize)]
struct OpenAiImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl OpenAiImageData {
    fn into_image(self) -> Option<GeneratedImage> {
        match (self.url, self.b64_json) {
            (Some(url), _) if !url.is_empty() => Some(GeneratedImage::Url(url)),
            (_, Some(data)) if !data.is_empty() => Some(GeneratedImage::Base64 {
                data,
                content_type: "image/png".to_string(),
            }),
            _ => None,
        }
    }
}

#[async_trait]
impl ImageGenProvider for OpenAiImageGenProvider {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let url = format!("{}/images/generations", self.base_url.trim_end_matches('/'));

        let wire_request = OpenAiImageRequest {
            prompt,
            model: &self.settings.model,
            n: 1,
            size: &self.settings.size,
            quality: &self.settings.quality,
            style: &self.settings.style,
            response_format: &self.settings.response_format,
        };

        tracing::debug!(
            provider = %self.name,
            model = %self.settings.model,
            "sending image generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(provider = %self.name, error = %e, "image generation request failed");
                ImageGenError::ConnectionError(format!("Failed to send request to OpenAI image generation: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(
                provider = %self.name,
                status = %status,
                "OpenAI image generation API error"
            );

            return Err(match status.as_u16() {
                401 => ImageGenError::AuthenticationFailed(error_text),
                400 => ImageGenError::InvalidRequest(error_text),
                _ => ImageGenError::ProviderApiError {
                    status: status.as_u16(),
                    message: error_text,
                },
            });
        }

        let wire_response: OpenAiImageResponse = response.json().await.map_err(|e| {
            tracing::error!(
                provider = %self.name,
                error = %e,
                "failed to parse OpenAI image generation response"
            );
            ImageGenError::InvalidResponse(e.to_string())
        })?;

        tracing::debug!(provider = %self.name, "image generation request complete");

        wire_response
            .data
            .into_iter()
            .next()
            .and_then(OpenAiImageData::into_image)
            .ok_or_else(|| ImageGenError::InvalidResponse("response contained no image".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

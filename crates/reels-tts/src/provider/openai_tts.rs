use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::TtsError,
    http_client::http_client,
    types::{SpeechResponse, content_type_for_format},
};

use super::{TtsProvider, read_audio};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "tts-1";
const DEFAULT_VOICE: &str = "alloy";
const DEFAULT_FORMAT: &str = "mp3";

/// `OpenAI` TTS provider
pub(crate) struct OpenAiTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
    model: String,
    voice: String,
    response_format: String,
}

impl OpenAiTtsProvider {
    pub fn new(name: String, api_key: SecretString, config: &reels_config::TtsProviderConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_API_URL.to_string()),
            api_key,
            name,
            model: config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice: config.voice.clone().unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            response_format: config
                .response_format
                .clone()
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/audio/speech", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "OpenAI TTS request: model={}, voice={}, input_len={}",
            self.model,
            self.voice,
            text.len(),
        );

        let body = OpenAiTtsRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: &self.response_format,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI TTS request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to OpenAI TTS: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("OpenAI TTS API error ({status}): {error_text}");

            return Err(TtsError::from_status(status, error_text));
        }

        read_audio(&self.name, response, content_type_for_format(&self.response_format)).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{error::TtsError, http_client::http_client, types::SpeechResponse};

use super::{TtsProvider, read_audio};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";
const DEFAULT_MODEL: &str = "eleven_multilingual_v2";
/// "Rachel", one of the premade voices
const DEFAULT_VOICE: &str = "21m00Tcm4TlvDq8ikWAM";

/// `ElevenLabs` TTS provider
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
    model: String,
    voice: String,
}

impl ElevenLabsProvider {
    pub fn new(name: String, api_key: SecretString, config: &reels_config::TtsProviderConfig) -> Self {
        Self {
            client: http_client(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string()),
            api_key,
            name,
            model: config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice: config.voice.clone().unwrap_or_else(|| DEFAULT_VOICE.to_string()),
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/text-to-speech/{}", self.base_url.trim_end_matches('/'), self.voice);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            self.model,
            self.voice,
            text.len(),
        );

        let body = ElevenLabsRequest {
            text,
            model_id: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", self.api_key.expose_secret().to_string())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to ElevenLabs: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("ElevenLabs API error ({status}): {error_text}");

            return Err(TtsError::from_status(status, error_text));
        }

        read_audio(&self.name, response, "audio/mpeg").await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub mod command;
pub mod elevenlabs;
pub mod openai_tts;

use async_trait::async_trait;

use crate::types::SpeechResponse;

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize narration for a script
    async fn synthesize(&self, text: &str) -> crate::error::Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Read the body of a successful audio response
pub(crate) async fn read_audio(
    provider: &str,
    response: reqwest::Response,
    fallback_content_type: &str,
) -> crate::error::Result<SpeechResponse> {
    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_content_type)
        .to_string();

    let audio = response.bytes().await.map_err(|e| {
        tracing::error!(provider, error = %e, "failed to read TTS response body");
        crate::error::TtsError::InvalidAudio(e.to_string())
    })?;

    tracing::debug!(provider, bytes = audio.len(), "TTS synthesis complete");

    Ok(SpeechResponse::Audio {
        bytes: audio.to_vec(),
        content_type,
    })
}

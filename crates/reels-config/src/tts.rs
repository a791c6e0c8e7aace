use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;

/// Top-level TTS configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// TTS provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, TtsProviderConfig>,
}

/// Configuration for a single TTS provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: TtsProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier (e.g. "tts-1" or "`eleven_multilingual_v2`")
    #[serde(default)]
    pub model: Option<String>,
    /// Voice identifier (e.g. "alloy" or an `ElevenLabs` voice ID)
    #[serde(default)]
    pub voice: Option<String>,
    /// Output audio format requested from the vendor (mp3, wav, ...)
    #[serde(default)]
    pub response_format: Option<String>,
    /// Program to run for `command` providers
    #[serde(default)]
    pub program: Option<String>,
    /// Arguments for `command` providers; `{text}` and `{output}` are substituted
    #[serde(default)]
    pub args: Vec<String>,
    /// Mime type of the audio a `command` provider writes
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Supported TTS providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TtsProviderType {
    /// `OpenAI` TTS
    OpenaiTts,
    /// `ElevenLabs`
    Elevenlabs,
    /// External program that writes an audio file
    Command,
}

impl TtsProviderType {
    /// Whether this provider talks to a vendor API and needs a key
    pub const fn requires_api_key(self) -> bool {
        !matches!(self, Self::Command)
    }
}

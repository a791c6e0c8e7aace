use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level language generation configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmConfig {
    /// LLM provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, LlmProviderConfig>,
}

/// Configuration for a single LLM provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmProviderConfig {
    /// Provider protocol type
    #[serde(rename = "type")]
    pub provider_type: LlmProviderType,
    /// API key for authentication
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used for every completion sent to this provider
    pub model: String,
    /// Nucleus sampling threshold forwarded with each request
    #[serde(default)]
    pub top_p: Option<f64>,
}

/// Supported LLM provider protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProviderType {
    /// OpenAI-compatible chat completions (`OpenAI`, NVIDIA NIM, ...)
    Openai,
    /// Anthropic Messages API
    Anthropic,
}

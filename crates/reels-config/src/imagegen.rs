use indexmap::IndexMap;
use secrecy::SecretString;
use serde::Deserialize;

/// Top-level image generation configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenConfig {
    /// Image generation provider configurations keyed by name
    #[serde(default)]
    pub providers: IndexMap<String, ImageGenProviderConfig>,
}

/// Configuration for a single image generation provider
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageGenProviderConfig {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: ImageGenProviderType,
    /// API key
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier (e.g. "dall-e-3")
    #[serde(default)]
    pub model: Option<String>,
    /// Size of generated images
    #[serde(default)]
    pub size: Option<String>,
    /// Quality of generated images ("standard" or "hd")
    #[serde(default)]
    pub quality: Option<String>,
    /// Style of generated images ("natural" or "vivid")
    #[serde(default)]
    pub style: Option<String>,
    /// Response format ("url" or "`b64_json`")
    #[serde(default)]
    pub response_format: Option<String>,
    /// URL template for `url_template` providers, `{prompt}` is substituted
    #[serde(default)]
    pub template: Option<String>,
}

/// Supported image generation providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageGenProviderType {
    /// `OpenAI` image generation
    Openai,
    /// Build an image URL from a template instead of generating one
    UrlTemplate,
}

impl ImageGenProviderType {
    /// Whether this provider talks to a vendor API and needs a key
    pub const fn requires_api_key(self) -> bool {
        matches!(self, Self::Openai)
    }
}

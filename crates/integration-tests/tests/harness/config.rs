//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use reels_config::{
    Config, HealthConfig, ImageGenProviderConfig, ImageGenProviderType, ImagePromptStrategy, LlmProviderConfig,
    LlmProviderType, ServerConfig, TtsProviderConfig, TtsProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Point text, speech and image providers at one mock vendor
    pub fn with_vendor(mut self, base_url: &str) -> Self {
        self.config.llm.providers.insert(
            "mock".to_owned(),
            LlmProviderConfig {
                provider_type: LlmProviderType::Openai,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.parse().expect("valid URL")),
                model: "mock-writer".to_owned(),
                top_p: Some(1.0),
            },
        );

        self.config.tts.providers.insert(
            "mock".to_owned(),
            TtsProviderConfig {
                provider_type: TtsProviderType::OpenaiTts,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                model: None,
                voice: None,
                response_format: None,
                program: None,
                args: Vec::new(),
                content_type: None,
            },
        );

        self.config.imagegen.providers.insert(
            "mock".to_owned(),
            ImageGenProviderConfig {
                provider_type: ImageGenProviderType::Openai,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                model: None,
                size: None,
                quality: None,
                style: None,
                response_format: None,
                template: None,
            },
        );

        self
    }

    /// Choose how image prompts are produced
    pub fn with_image_prompts(mut self, strategy: ImagePromptStrategy) -> Self {
        self.config.pipeline.image_prompts = strategy;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config.validate().expect("test config is valid");
        self.config
    }
}

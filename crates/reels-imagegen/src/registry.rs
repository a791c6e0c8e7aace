use std::sync::Arc;

use indexmap::IndexMap;
use reels_config::{ImageGenConfig, ImageGenProviderConfig, ImageGenProviderType};
use secrecy::SecretString;

use crate::{
    error::ImageGenError,
    provider::{ImageGenProvider, openai::OpenAiImageGenProvider, url_template::UrlTemplateProvider},
};

/// Configured image generation providers, in configuration order
pub struct ImageGenRegistry {
    providers: IndexMap<String, Arc<dyn ImageGenProvider>>,
}

impl ImageGenRegistry {
    pub fn from_config(config: &ImageGenConfig) -> crate::error::Result<Self> {
        let mut providers: IndexMap<String, Arc<dyn ImageGenProvider>> = IndexMap::new();

        for (name, provider_config) in &config.providers {
            tracing::debug!("Initializing image generation provider: {name}");

            let provider: Arc<dyn ImageGenProvider> = match provider_config.provider_type {
                ImageGenProviderType::Openai => {
                    let api_key = resolve_api_key(name, provider_config)?;
                    Arc::new(OpenAiImageGenProvider::new(name.clone(), api_key, provider_config))
                }
                ImageGenProviderType::UrlTemplate => {
                    Arc::new(UrlTemplateProvider::new(name.clone(), provider_config)?)
                }
            };

            providers.insert(name.clone(), provider);
        }

        tracing::debug!(
            "Image generation registry initialized with {} provider(s)",
            providers.len()
        );

        Ok(Self { providers })
    }

    /// Look up a provider by name, or the first configured one
    pub fn get(&self, name: Option<&str>) -> crate::error::Result<Arc<dyn ImageGenProvider>> {
        let found = match name {
            Some(name) => self.providers.get(name),
            None => self.providers.values().next(),
        };

        found.cloned().ok_or_else(|| {
            ImageGenError::ProviderNotFound(name.unwrap_or("<none configured>").to_string())
        })
    }
}

fn resolve_api_key(name: &str, config: &ImageGenProviderConfig) -> crate::error::Result<SecretString> {
    config.api_key.clone().ok_or_else(|| {
        ImageGenError::ConfigError(format!(
            "API key required for image generation provider '{name}'"
        ))
    })
}

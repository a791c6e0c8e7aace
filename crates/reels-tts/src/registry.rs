use std::sync::Arc;

use indexmap::IndexMap;
use secrecy::SecretString;
use reels_config::{TtsConfig, TtsProviderConfig, TtsProviderType};

use crate::{
    error::TtsError,
    provider::{TtsProvider, command::CommandProvider, elevenlabs::ElevenLabsProvider, openai_tts::OpenAiTtsProvider},
};

/// Configured TTS providers, in configuration order
pub struct TtsRegistry {
    providers: IndexMap<String, Arc<dyn TtsProvider>>,
}

impl TtsRegistry {
    /// Build every provider in the configuration
    pub fn from_config(config: &TtsConfig) -> crate::error::Result<Self> {
        let mut providers: IndexMap<String, Arc<dyn TtsProvider>> = IndexMap::new();

        for (name, provider_config) in &config.providers {
            tracing::debug!("Initializing TTS provider: {name}");

            let provider: Arc<dyn TtsProvider> = match provider_config.provider_type {
                TtsProviderType::OpenaiTts => {
                    let api_key = resolve_api_key(name, provider_config)?;
                    Arc::new(OpenAiTtsProvider::new(name.clone(), api_key, provider_config))
                }
                TtsProviderType::Elevenlabs => {
                    let api_key = resolve_api_key(name, provider_config)?;
                    Arc::new(ElevenLabsProvider::new(name.clone(), api_key, provider_config))
                }
                TtsProviderType::Command => Arc::new(CommandProvider::new(name.clone(), provider_config)?),
            };

            providers.insert(name.clone(), provider);
        }

        tracing::debug!("TTS registry initialized with {} provider(s)", providers.len());

        Ok(Self { providers })
    }

    /// Look up a provider by name, or the first configured one
    pub fn get(&self, name: Option<&str>) -> crate::error::Result<Arc<dyn TtsProvider>> {
        let found = match name {
            Some(name) => self.providers.get(name),
            None => self.providers.values().next(),
        };

        found
            .cloned()
            .ok_or_else(|| TtsError::ProviderNotFound(name.unwrap_or("<none configured>").to_string()))
    }
}

fn resolve_api_key(name: &str, config: &TtsProviderConfig) -> crate::error::Result<SecretString> {
    config
        .api_key
        .clone()
        .ok_or_else(|| TtsError::ConfigError(format!("API key required for TTS provider '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_config(provider_type: TtsProviderType, api_key: Option<&str>) -> TtsProviderConfig {
        TtsProviderConfig {
            provider_type,
            api_key: api_key.map(SecretString::from),
            base_url: None,
            model: None,
            voice: None,
            response_format: None,
            program: Some("python".to_owned()),
            args: vec!["{output}".to_owned()],
            content_type: None,
        }
    }

    #[test]
    fn builds_all_provider_types() {
        let mut config = TtsConfig::default();
        config
            .providers
            .insert("openai".to_owned(), provider_config(TtsProviderType::OpenaiTts, Some("k")));
        config
            .providers
            .insert("eleven".to_owned(), provider_config(TtsProviderType::Elevenlabs, Some("k")));
        config
            .providers
            .insert("riva".to_owned(), provider_config(TtsProviderType::Command, None));

        let registry = TtsRegistry::from_config(&config).unwrap();
        assert_eq!(registry.get(None).unwrap().name(), "openai");
        assert_eq!(registry.get(Some("riva")).unwrap().name(), "riva");
        assert!(registry.get(Some("polly")).is_err());
    }

    #[test]
    fn http_provider_without_key_fails() {
        let mut config = TtsConfig::default();
        config
            .providers
            .insert("openai".to_owned(), provider_config(TtsProviderType::OpenaiTts, None));

        assert!(matches!(TtsRegistry::from_config(&config), Err(TtsError::ConfigError(_))));
    }
}

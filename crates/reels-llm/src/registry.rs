use std::sync::Arc;

use indexmap::IndexMap;
use reels_config::{LlmConfig, LlmProviderType};

use crate::error::{LlmError, Result};
use crate::provider::{LlmProvider, anthropic::AnthropicProvider, openai::OpenAiProvider};

/// Configured LLM providers, in configuration order
pub struct LlmRegistry {
    providers: IndexMap<String, Arc<dyn LlmProvider>>,
}

impl LlmRegistry {
    /// Build every provider in the configuration
    pub fn from_config(config: &LlmConfig) -> Self {
        let mut providers: IndexMap<String, Arc<dyn LlmProvider>> = IndexMap::new();

        for (name, provider_config) in &config.providers {
            tracing::debug!("Initializing LLM provider: {name}");

            let provider: Arc<dyn LlmProvider> = match provider_config.provider_type {
                LlmProviderType::Openai => Arc::new(OpenAiProvider::new(name.clone(), provider_config)),
                LlmProviderType::Anthropic => Arc::new(AnthropicProvider::new(name.clone(), provider_config)),
            };

            providers.insert(name.clone(), provider);
        }

        tracing::debug!("LLM registry initialized with {} provider(s)", providers.len());

        Self { providers }
    }

    /// Look up a provider by name, or the first configured one
    pub fn get(&self, name: Option<&str>) -> Result<Arc<dyn LlmProvider>> {
        let found = match name {
            Some(name) => self.providers.get(name),
            None => self.providers.values().next(),
        };

        found
            .cloned()
            .ok_or_else(|| LlmError::ProviderNotFound(name.unwrap_or("<none configured>").to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use reels_config::LlmProviderConfig;
    use secrecy::SecretString;

    use super::*;

    fn provider_config(provider_type: LlmProviderType) -> LlmProviderConfig {
        LlmProviderConfig {
            provider_type,
            api_key: Some(SecretString::from("key")),
            base_url: None,
            model: "model".to_owned(),
            top_p: None,
        }
    }

    fn registry() -> LlmRegistry {
        let mut config = LlmConfig::default();
        config.providers.insert("nvidia".to_owned(), provider_config(LlmProviderType::Openai));
        config.providers.insert("claude".to_owned(), provider_config(LlmProviderType::Anthropic));
        LlmRegistry::from_config(&config)
    }

    #[test]
    fn defaults_to_first_configured_provider() {
        assert_eq!(registry().get(None).unwrap().name(), "nvidia");
    }

    #[test]
    fn finds_provider_by_name() {
        assert_eq!(registry().get(Some("claude")).unwrap().name(), "claude");
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let err = registry().get(Some("gemini")).err().unwrap();
        assert!(matches!(err, LlmError::ProviderNotFound(name) if name == "gemini"));
    }
}

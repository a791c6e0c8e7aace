use std::path::Path;

use indexmap::IndexMap;
use secrecy::ExposeSecret;

use crate::{AnyOrArray, Config, ImageGenProviderType, TtsProviderType};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a capability has no provider, a selector names
    /// an unknown provider, or a provider is missing required settings
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_has_capabilities()?;
        self.validate_selectors()?;
        self.validate_llm_config()?;
        self.validate_tts_config()?;
        self.validate_imagegen_config()?;
        self.validate_pipeline_config()?;
        self.validate_cors()?;
        Ok(())
    }

    /// Every reel needs text, audio and images
    fn validate_has_capabilities(&self) -> anyhow::Result<()> {
        if self.llm.providers.is_empty() {
            anyhow::bail!("at least one LLM provider must be configured");
        }
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS provider must be configured");
        }
        if self.imagegen.providers.is_empty() {
            anyhow::bail!("at least one image generation provider must be configured");
        }
        Ok(())
    }

    fn validate_selectors(&self) -> anyhow::Result<()> {
        let pipeline = &self.pipeline;

        check_selector("llm_provider", pipeline.llm_provider.as_deref(), &self.llm.providers)?;
        check_selector(
            "image_prompt_llm_provider",
            pipeline.image_prompt_llm_provider.as_deref(),
            &self.llm.providers,
        )?;
        check_selector("tts_provider", pipeline.tts_provider.as_deref(), &self.tts.providers)?;
        check_selector(
            "imagegen_provider",
            pipeline.imagegen_provider.as_deref(),
            &self.imagegen.providers,
        )?;

        Ok(())
    }

    fn validate_llm_config(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.llm.providers {
            if provider.model.trim().is_empty() {
                anyhow::bail!("LLM provider '{name}' must set a model");
            }
            if provider.api_key.as_ref().is_none_or(|key| key.expose_secret().is_empty()) {
                anyhow::bail!("LLM provider '{name}' requires an api_key");
            }
        }

        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.tts.providers {
            if provider.provider_type.requires_api_key() && provider.api_key.is_none() {
                anyhow::bail!("TTS provider '{name}' requires an api_key");
            }

            if provider.provider_type == TtsProviderType::Command {
                if provider.program.as_deref().is_none_or(str::is_empty) {
                    anyhow::bail!("TTS provider '{name}' of type command must set a program");
                }
                if !provider.args.iter().any(|arg| arg.contains("{output}")) {
                    anyhow::bail!("TTS provider '{name}' of type command must pass {{output}} in its args");
                }
            }
        }

        Ok(())
    }

    fn validate_imagegen_config(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.imagegen.providers {
            if provider.provider_type.requires_api_key() && provider.api_key.is_none() {
                anyhow::bail!("image generation provider '{name}' requires an api_key");
            }

            if provider.provider_type == ImageGenProviderType::UrlTemplate
                && !provider.template.as_deref().is_some_and(|t| t.contains("{prompt}"))
            {
                anyhow::bail!("image generation provider '{name}' needs a template containing {{prompt}}");
            }
        }

        Ok(())
    }

    fn validate_pipeline_config(&self) -> anyhow::Result<()> {
        let pipeline = &self.pipeline;

        if pipeline.subtopic_count == 0 {
            anyhow::bail!("pipeline.subtopic_count must be greater than 0");
        }
        if pipeline.images_per_reel == 0 {
            anyhow::bail!("pipeline.images_per_reel must be greater than 0");
        }

        for (field, value) in [
            ("subtopic_temperature", pipeline.subtopic_temperature),
            ("script_temperature", pipeline.script_temperature),
            ("image_prompt_temperature", pipeline.image_prompt_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                anyhow::bail!("pipeline.{field} must be between 0.0 and 2.0, got {value}");
            }
        }

        pipeline.call_timeout()?;

        Ok(())
    }

    /// Credentialed CORS cannot use wildcards
    fn validate_cors(&self) -> anyhow::Result<()> {
        let Some(cors) = self.server.cors.as_ref().filter(|cors| cors.credentials) else {
            return Ok(());
        };

        for (field, value) in [("origins", &cors.origins), ("methods", &cors.methods), ("headers", &cors.headers)] {
            if *value == AnyOrArray::Any {
                anyhow::bail!("server.cors.credentials = true requires an explicit list for server.cors.{field}, not \"*\"");
            }
        }

        Ok(())
    }
}

fn check_selector<T>(field: &str, selected: Option<&str>, providers: &IndexMap<String, T>) -> anyhow::Result<()> {
    match selected {
        Some(name) if !providers.contains_key(name) => {
            anyhow::bail!("pipeline.{field} names unknown provider '{name}'")
        }
        _ => Ok(()),
    }
}

use std::time::Duration;

use reels_config::{ImagePromptStrategy, PipelineConfig};

/// Resolved pipeline tuning
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub subtopic_count: usize,
    pub images_per_reel: usize,
    pub image_prompts: ImagePromptStrategy,
    pub subtopic_temperature: f64,
    pub script_temperature: f64,
    pub image_prompt_temperature: f64,
    pub max_tokens: u32,
    pub image_prompt_max_tokens: u32,
    /// Upper bound for any single adapter call
    pub call_timeout: Duration,
}

impl PipelineSettings {
    /// Resolve settings from the `[pipeline]` section
    ///
    /// # Errors
    ///
    /// Returns an error if `call_timeout` is not a valid duration
    pub fn from_config(config: &PipelineConfig) -> anyhow::Result<Self> {
        Ok(Self {
            subtopic_count: config.subtopic_count.max(1),
            images_per_reel: config.images_per_reel.max(1),
            image_prompts: config.image_prompts,
            subtopic_temperature: config.subtopic_temperature,
            script_temperature: config.script_temperature,
            image_prompt_temperature: config.image_prompt_temperature,
            max_tokens: config.max_tokens,
            image_prompt_max_tokens: config.image_prompt_max_tokens,
            call_timeout: config.call_timeout()?,
        })
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        let config = PipelineConfig::default();

        Self {
            subtopic_count: config.subtopic_count,
            images_per_reel: config.images_per_reel,
            image_prompts: config.image_prompts,
            subtopic_temperature: config.subtopic_temperature,
            script_temperature: config.script_temperature,
            image_prompt_temperature: config.image_prompt_temperature,
            max_tokens: config.max_tokens,
            image_prompt_max_tokens: config.image_prompt_max_tokens,
            call_timeout: Duration::from_secs(90),
        }
    }
}

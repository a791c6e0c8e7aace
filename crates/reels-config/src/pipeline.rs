use std::time::Duration;

use serde::Deserialize;

/// How the pipeline sources the prompts handed to the image generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImagePromptStrategy {
    /// Ask the LLM for one visual prompt per chunk of the narrated script
    #[default]
    Script,
    /// Use fixed templates around the subtopic title, no extra LLM calls
    Topic,
}

/// Reel pipeline tuning and provider selection
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Number of subtopics (and therefore reels) requested per topic
    #[serde(default = "default_subtopic_count")]
    pub subtopic_count: usize,
    /// Upper bound on images per reel
    #[serde(default = "default_images_per_reel")]
    pub images_per_reel: usize,
    #[serde(default)]
    pub image_prompts: ImagePromptStrategy,
    #[serde(default = "default_subtopic_temperature")]
    pub subtopic_temperature: f64,
    #[serde(default = "default_creative_temperature")]
    pub script_temperature: f64,
    #[serde(default = "default_creative_temperature")]
    pub image_prompt_temperature: f64,
    /// Token cap for subtopic and script completions
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Token cap for each derived image prompt
    #[serde(default = "default_image_prompt_max_tokens")]
    pub image_prompt_max_tokens: u32,
    /// Upper bound for any single adapter call (e.g. "90s", "2m")
    #[serde(default = "default_call_timeout")]
    pub call_timeout: String,
    /// LLM provider for subtopics and scripts (first configured if unset)
    #[serde(default)]
    pub llm_provider: Option<String>,
    /// LLM provider for image prompt derivation (falls back to `llm_provider`)
    #[serde(default)]
    pub image_prompt_llm_provider: Option<String>,
    /// TTS provider (first configured if unset)
    #[serde(default)]
    pub tts_provider: Option<String>,
    /// Image generation provider (first configured if unset)
    #[serde(default)]
    pub imagegen_provider: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            subtopic_count: default_subtopic_count(),
            images_per_reel: default_images_per_reel(),
            image_prompts: ImagePromptStrategy::default(),
            subtopic_temperature: default_subtopic_temperature(),
            script_temperature: default_creative_temperature(),
            image_prompt_temperature: default_creative_temperature(),
            max_tokens: default_max_tokens(),
            image_prompt_max_tokens: default_image_prompt_max_tokens(),
            call_timeout: default_call_timeout(),
            llm_provider: None,
            image_prompt_llm_provider: None,
            tts_provider: None,
            imagegen_provider: None,
        }
    }
}

impl PipelineConfig {
    /// Parsed per-call timeout
    ///
    /// # Errors
    ///
    /// Returns an error if `call_timeout` is not a valid duration string
    pub fn call_timeout(&self) -> anyhow::Result<Duration> {
        duration_str::parse(&self.call_timeout)
            .map_err(|e| anyhow::anyhow!("invalid pipeline.call_timeout '{}': {e}", self.call_timeout))
    }
}

const fn default_subtopic_count() -> usize {
    3
}

const fn default_images_per_reel() -> usize {
    3
}

const fn default_subtopic_temperature() -> f64 {
    0.5
}

const fn default_creative_temperature() -> f64 {
    0.7
}

const fn default_max_tokens() -> u32 {
    1024
}

const fn default_image_prompt_max_tokens() -> u32 {
    150
}

fn default_call_timeout() -> String {
    "90s".to_string()
}

#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod imagegen;
pub mod llm;
mod loader;
pub mod pipeline;
pub mod server;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use cors::*;
pub use env::ExpandError;
pub use health::*;
pub use imagegen::*;
pub use llm::*;
pub use pipeline::*;
pub use server::*;
pub use telemetry::TelemetryConfig;
pub use tts::*;

/// Top-level ResearchReels configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Language generation providers
    #[serde(default)]
    pub llm: LlmConfig,
    /// Speech synthesis providers
    #[serde(default)]
    pub tts: TtsConfig,
    /// Image generation providers
    #[serde(default)]
    pub imagegen: ImageGenConfig,
    /// Reel pipeline tuning and provider selection
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

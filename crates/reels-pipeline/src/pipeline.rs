use std::{sync::Arc, time::Instant};

use futures::future::{join_all, try_join_all};
use reels_config::{Config, ImagePromptStrategy};
use reels_imagegen::{ImageGenProvider, ImageGenRegistry};
use reels_llm::{CompletionRequest, LlmProvider, LlmRegistry};
use reels_telemetry::PipelineMetrics;
use reels_tts::{TtsProvider, TtsRegistry};
use tracing::Instrument;

use crate::{
    deadline::bounded,
    error::{ReelError, Result},
    image_prompts::ImagePromptDeriver,
    media, prompts,
    reel::Reel,
    settings::PipelineSettings,
    subtopics,
};

/// Providers the pipeline talks to
pub struct Adapters {
    /// Subtopics and scripts
    pub llm: Arc<dyn LlmProvider>,
    /// Image prompt derivation, `llm` when unset
    pub image_prompt_llm: Option<Arc<dyn LlmProvider>>,
    pub tts: Arc<dyn TtsProvider>,
    pub images: Arc<dyn ImageGenProvider>,
}

impl Adapters {
    /// Build the providers selected by `[pipeline]`
    ///
    /// # Errors
    ///
    /// Returns an error if a provider cannot be built or a selector names
    /// an unknown provider
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let selection = &config.pipeline;

        let llms = LlmRegistry::from_config(&config.llm);
        let llm = llms.get(selection.llm_provider.as_deref())?;
        let image_prompt_llm = selection
            .image_prompt_llm_provider
            .as_deref()
            .map(|name| llms.get(Some(name)))
            .transpose()?;

        let tts = TtsRegistry::from_config(&config.tts)?.get(selection.tts_provider.as_deref())?;
        let images = ImageGenRegistry::from_config(&config.imagegen)?.get(selection.imagegen_provider.as_deref())?;

        tracing::info!(
            llm = %llm.name(),
            image_prompt_llm = %image_prompt_llm.as_ref().map_or_else(|| llm.name(), |p| p.name()),
            tts = %tts.name(),
            images = %images.name(),
            "pipeline providers selected"
        );

        Ok(Self {
            llm,
            image_prompt_llm,
            tts,
            images,
        })
    }
}

/// Stage of a reel unit, for logs and the failure counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Script,
    Audio,
    ImagePrompts,
    Images,
    Assembly,
}

impl Stage {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Audio => "audio",
            Self::ImagePrompts => "image_prompts",
            Self::Images => "images",
            Self::Assembly => "assembly",
        }
    }

    const fn failed(self, error: ReelError) -> UnitFailure {
        UnitFailure { stage: self, error }
    }
}

struct UnitFailure {
    stage: Stage,
    error: ReelError,
}

/// Turns a research topic into a list of narrated, illustrated reels
pub struct ReelPipeline {
    llm: Arc<dyn LlmProvider>,
    tts: Arc<dyn TtsProvider>,
    images: Arc<dyn ImageGenProvider>,
    image_prompts: ImagePromptDeriver,
    settings: PipelineSettings,
    metrics: PipelineMetrics,
}

impl ReelPipeline {
    pub fn new(adapters: Adapters, settings: PipelineSettings) -> Self {
        let prompt_llm = adapters.image_prompt_llm.unwrap_or_else(|| adapters.llm.clone());

        Self {
            image_prompts: ImagePromptDeriver::new(prompt_llm, &settings),
            llm: adapters.llm,
            tts: adapters.tts,
            images: adapters.images,
            settings,
            metrics: PipelineMetrics::new(),
        }
    }

    /// Build the pipeline and its providers from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if settings or providers are invalid
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let settings = PipelineSettings::from_config(&config.pipeline)?;
        Ok(Self::new(Adapters::from_config(config)?, settings))
    }

    pub const fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Generate reels for `topic`
    ///
    /// Subtopics are produced first; every subtopic then becomes an
    /// independent unit running concurrently with its siblings. A failing
    /// unit is dropped, the rest keep their subtopic order.
    ///
    /// # Errors
    ///
    /// - [`ReelError::InvalidInput`] for a blank topic, before any provider call
    /// - [`ReelError::UpstreamFormat`] when the subtopic list cannot be read
    /// - [`ReelError::UpstreamUnavailable`] when the subtopic call fails
    /// - [`ReelError::NoValidReels`] when every unit fails
    pub async fn generate_reels(&self, topic: &str) -> Result<Vec<Reel>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ReelError::InvalidInput);
        }

        let start = Instant::now();
        let result = self.run(topic).await;
        self.metrics
            .record_request(start, result.as_ref().map_or(0, Vec::len));

        result
    }

    async fn run(&self, topic: &str) -> Result<Vec<Reel>> {
        let subtopics = self.subtopics(topic).await?;
        tracing::info!(topic, subtopics = ?subtopics, "generating reels");

        let units = subtopics.iter().map(|subtopic| {
            self.unit(subtopic)
                .instrument(tracing::info_span!("reel", subtopic = %subtopic))
        });
        let reels: Vec<Reel> = join_all(units).await.into_iter().flatten().collect();

        if reels.is_empty() {
            tracing::error!(topic, "no subtopic produced a reel");
            return Err(ReelError::NoValidReels);
        }

        tracing::info!(topic, reels = reels.len(), requested = subtopics.len(), "reels generated");
        Ok(reels)
    }

    async fn subtopics(&self, topic: &str) -> Result<Vec<String>> {
        let count = self.settings.subtopic_count;
        let request = CompletionRequest::new(prompts::subtopics(topic, count))
            .with_system(prompts::DIRECT_RESPONSE_SYSTEM)
            .with_temperature(self.settings.subtopic_temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = bounded(
            self.settings.call_timeout,
            "subtopic generation",
            self.llm.complete(&request),
        )
        .await
        .inspect_err(|e| tracing::error!(provider = %self.llm.name(), error = %e, "subtopic generation failed"))?;

        subtopics::parse(&response.text, count).inspect_err(|e| {
            tracing::error!(raw = %response.text, error = %e, "could not parse subtopics");
        })
    }

    async fn unit(&self, subtopic: &str) -> Option<Reel> {
        match self.build_reel(subtopic).await {
            Ok(reel) => Some(reel),
            Err(UnitFailure { stage, error }) => {
                tracing::warn!(subtopic, stage = stage.as_str(), error = %error, "dropping reel");
                self.metrics.record_unit_failure(stage.as_str());
                None
            }
        }
    }

    async fn build_reel(&self, subtopic: &str) -> std::result::Result<Reel, UnitFailure> {
        let content = self
            .script(subtopic)
            .await
            .map_err(|e| Stage::Script.failed(e))?;

        let (audio_src, images) = tokio::join!(self.narrate(&content), self.illustrate(subtopic, &content));
        let audio_src = audio_src?;
        let images = images?;

        Reel::assemble(subtopic, content, audio_src, images)
            .ok_or_else(|| Stage::Assembly.failed(ReelError::Internal("reel is missing a field".into())))
    }

    async fn script(&self, subtopic: &str) -> Result<String> {
        let request = CompletionRequest::new(prompts::script(subtopic))
            .with_system(prompts::DIRECT_RESPONSE_SYSTEM)
            .with_temperature(self.settings.script_temperature)
            .with_max_tokens(self.settings.max_tokens);

        let response = bounded(self.settings.call_timeout, "script generation", self.llm.complete(&request)).await?;

        let script = response.text.trim();
        if script.is_empty() {
            return Err(ReelError::UpstreamFormat("empty script".into()));
        }

        tracing::debug!(words = script.split_whitespace().count(), "script written");
        Ok(script.to_owned())
    }

    async fn narrate(&self, content: &str) -> std::result::Result<String, UnitFailure> {
        let speech = bounded(self.settings.call_timeout, "speech synthesis", self.tts.synthesize(content))
            .await
            .map_err(|e| Stage::Audio.failed(e))?;

        media::audio_src(speech)
            .ok_or_else(|| Stage::Audio.failed(ReelError::UpstreamUnavailable("speech provider returned no audio".into())))
    }

    async fn illustrate(&self, subtopic: &str, content: &str) -> std::result::Result<Vec<String>, UnitFailure> {
        let count = self.settings.images_per_reel;
        let image_prompts = match self.settings.image_prompts {
            ImagePromptStrategy::Script => self
                .image_prompts
                .derive_image_prompts(content, count)
                .await
                .map_err(|e| Stage::ImagePrompts.failed(e))?,
            ImagePromptStrategy::Topic => prompts::topic_images(subtopic, count),
        };

        // One failed image drops the whole reel
        try_join_all(image_prompts.iter().map(|prompt| self.image(prompt)))
            .await
            .map_err(|e| Stage::Images.failed(e))
    }

    async fn image(&self, prompt: &str) -> Result<String> {
        let image = bounded(self.settings.call_timeout, "image generation", self.images.generate(prompt)).await?;

        media::image_src(image).ok_or_else(|| ReelError::UpstreamUnavailable("image provider returned no image".into()))
    }
}

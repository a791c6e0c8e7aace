//! Script chunking and per-chunk image prompt derivation

use std::sync::Arc;

use futures::future::try_join_all;
use reels_llm::{CompletionRequest, LlmProvider};

use crate::{
    deadline::bounded,
    error::{ReelError, Result},
    prompts,
    settings::PipelineSettings,
};

/// Split a script into at most `count` chunks of consecutive words
///
/// Chunks hold `ceil(words / count)` words each, so the last one may be
/// shorter and fewer than `count` chunks come back for short scripts.
pub fn chunk_words(script: &str, count: usize) -> Vec<String> {
    let words: Vec<&str> = script.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let size = words.len().div_ceil(count.max(1));
    words.chunks(size).map(|chunk| chunk.join(" ")).collect()
}

/// Derives one image prompt per script chunk
#[derive(Clone)]
pub struct ImagePromptDeriver {
    llm: Arc<dyn LlmProvider>,
    temperature: f64,
    max_tokens: u32,
    call_timeout: std::time::Duration,
}

impl ImagePromptDeriver {
    pub fn new(llm: Arc<dyn LlmProvider>, settings: &PipelineSettings) -> Self {
        Self {
            llm,
            temperature: settings.image_prompt_temperature,
            max_tokens: settings.image_prompt_max_tokens,
            call_timeout: settings.call_timeout,
        }
    }

    /// One prompt per chunk, in script order
    ///
    /// All chunks are sent concurrently; any failed derivation fails the
    /// whole call. A script without words yields no prompts.
    pub async fn derive_image_prompts(&self, script: &str, count: usize) -> Result<Vec<String>> {
        let chunks = chunk_words(script, count);
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(provider = %self.llm.name(), chunks = chunks.len(), "deriving image prompts");

        try_join_all(chunks.iter().map(|chunk| self.derive_one(chunk))).await
    }

    async fn derive_one(&self, chunk: &str) -> Result<String> {
        let request = CompletionRequest::new(prompts::image_prompt(chunk))
            .with_system(prompts::IMAGE_PROMPT_SYSTEM)
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens);

        let response = bounded(self.call_timeout, "image prompt derivation", self.llm.complete(&request)).await?;

        let prompt = response.text.trim();
        if prompt.is_empty() {
            return Err(ReelError::UpstreamFormat("empty image prompt".into()));
        }

        Ok(prompt.to_owned())
    }
}

pub(crate) mod openai;
pub(crate) mod url_template;

use async_trait::async_trait;

use crate::{error::Result, types::GeneratedImage};

/// Trait for image generation provider implementations
#[async_trait]
pub trait ImageGenProvider: Send + Sync {
    /// Generate a single image for the prompt
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage>;

    /// Get the provider name
    fn name(&self) -> &str;
}

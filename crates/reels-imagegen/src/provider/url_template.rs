//! Image references built from a URL template instead of a generation API
//!
//! Useful with stock-photo search endpoints such as
//! `https://source.unsplash.com/1024x1024/?{prompt}`.

use async_trait::async_trait;
use url::form_urlencoded;

use super::ImageGenProvider;
use crate::{
    error::{ImageGenError, Result},
    types::GeneratedImage,
};

pub(crate) struct UrlTemplateProvider {
    name: String,
    template: String,
}

impl UrlTemplateProvider {
    pub fn new(name: String, config: &reels_config::ImageGenProviderConfig) -> Result<Self> {
        let template = config
            .template
            .clone()
            .filter(|template| template.contains("{prompt}"))
            .ok_or_else(|| {
                ImageGenError::ConfigError(format!(
                    "image generation provider '{name}' needs a template containing {{prompt}}"
                ))
            })?;

        Ok(Self { name, template })
    }
}

#[async_trait]
impl ImageGenProvider for UrlTemplateProvider {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let encoded: String = form_urlencoded::byte_serialize(prompt.trim().as_bytes()).collect();
        Ok(GeneratedImage::Url(self.template.replace("{prompt}", &encoded)))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use reels_config::{ImageGenProviderConfig, ImageGenProviderType};

    use super::*;

    fn config(template: Option<&str>) -> ImageGenProviderConfig {
        ImageGenProviderConfig {
            provider_type: ImageGenProviderType::UrlTemplate,
            api_key: None,
            base_url: None,
            model: None,
            size: None,
            quality: None,
            style: None,
            response_format: None,
            template: template.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn encodes_prompt_into_template() {
        let provider = UrlTemplateProvider::new(
            "unsplash".to_owned(),
            &config(Some("https://source.unsplash.com/1024x1024/?{prompt}")),
        )
        .unwrap();

        let image = provider.generate("black holes & time").await.unwrap();
        assert_eq!(
            image,
            GeneratedImage::Url("https://source.unsplash.com/1024x1024/?black+holes+%26+time".to_owned())
        );
    }

    #[test]
    fn template_without_placeholder_is_rejected() {
        let result = UrlTemplateProvider::new("unsplash".to_owned(), &config(Some("https://example.com")));
        assert!(matches!(result, Err(ImageGenError::ConfigError(_))));
    }
}

/// One generated image as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Hosted image URL
    Url(String),
    /// Base64-encoded image bytes (when `response_format` is "`b64_json`")
    Base64 { data: String, content_type: String },
}

/// Synthesized speech as returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechResponse {
    /// Raw audio bytes and their mime type (e.g. "audio/mpeg")
    Audio { bytes: Vec<u8>, content_type: String },
    /// A URI the browser can play directly
    Uri(String),
}

/// Mime type for an `OpenAI`-style `response_format` value
pub(crate) fn content_type_for_format(format: &str) -> &'static str {
    match format {
        "opus" => "audio/opus",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        "pcm" => "audio/pcm",
        _ => "audio/mpeg",
    }
}

/// File extension for an audio mime type
pub(crate) fn extension_for_content_type(content_type: &str) -> &'static str {
    match content_type {
        "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
        "audio/opus" | "audio/ogg" => "ogg",
        "audio/aac" => "aac",
        "audio/flac" => "flac",
        "audio/pcm" => "pcm",
        _ => "mp3",
    }
}

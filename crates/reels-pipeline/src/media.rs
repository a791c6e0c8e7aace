//! Turning adapter output into references a browser can load

use base64::{Engine, engine::general_purpose::STANDARD};
use reels_imagegen::GeneratedImage;
use reels_tts::SpeechResponse;

/// Playable reference for synthesized speech, `None` if there is no audio
pub fn audio_src(speech: SpeechResponse) -> Option<String> {
    match speech {
        SpeechResponse::Audio { bytes, .. } if bytes.is_empty() => None,
        SpeechResponse::Audio { bytes, content_type } => Some(format!(
            "data:{};base64,{}",
            essence(&content_type, "audio/mpeg"),
            STANDARD.encode(bytes)
        )),
        SpeechResponse::Uri(uri) => Some(uri).filter(|uri| !uri.trim().is_empty()),
    }
}

/// Displayable reference for a generated image, `None` if it is empty
pub fn image_src(image: GeneratedImage) -> Option<String> {
    match image {
        GeneratedImage::Url(url) => Some(url).filter(|url| !url.trim().is_empty()),
        GeneratedImage::Base64 { data, .. } if data.is_empty() => None,
        GeneratedImage::Base64 { data, content_type } => Some(format!(
            "data:{};base64,{data}",
            essence(&content_type, "image/png")
        )),
    }
}

/// Mime type without parameters, or `fallback` when blank
fn essence<'a>(content_type: &'a str, fallback: &'a str) -> &'a str {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    if essence.is_empty() { fallback } else { essence }
}

use serde::{Deserialize, Serialize};

/// One finished reel as delivered to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    /// Subtopic this reel covers
    pub title: String,
    /// Narration script
    pub content: String,
    /// Playable audio reference (data URI or URL)
    pub audio_src: String,
    /// Image references in display order
    pub images: Vec<String>,
}

impl Reel {
    /// Assemble a reel, refusing one with any empty field
    pub fn assemble(title: &str, content: String, audio_src: String, images: Vec<String>) -> Option<Self> {
        let complete = !title.is_empty()
            && !content.is_empty()
            && !audio_src.is_empty()
            && !images.is_empty()
            && images.iter().all(|image| !image.is_empty());

        complete.then(|| Self {
            title: title.to_owned(),
            content,
            audio_src,
            images,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_renderer_field_names() {
        let reel = Reel::assemble(
            "Event Horizons",
            "Nothing escapes.".into(),
            "data:audio/mpeg;base64,AAAA".into(),
            vec!["https://img/1.png".into()],
        )
        .unwrap();

        let value = serde_json::to_value(&reel).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Event Horizons",
                "content": "Nothing escapes.",
                "audioSrc": "data:audio/mpeg;base64,AAAA",
                "images": ["https://img/1.png"],
            })
        );
    }

    #[test]
    fn refuses_incomplete_reels() {
        let audio = || "data:audio/mpeg;base64,AAAA".to_owned();
        let images = || vec!["https://img/1.png".to_owned()];

        assert!(Reel::assemble("", "text".into(), audio(), images()).is_none());
        assert!(Reel::assemble("T", String::new(), audio(), images()).is_none());
        assert!(Reel::assemble("T", "text".into(), String::new(), images()).is_none());
        assert!(Reel::assemble("T", "text".into(), audio(), Vec::new()).is_none());
        assert!(Reel::assemble("T", "text".into(), audio(), vec![String::new()]).is_none());
    }
}

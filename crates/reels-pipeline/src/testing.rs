//! In-process adapters for pipeline tests

use std::{
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use reels_imagegen::{GeneratedImage, ImageGenError, ImageGenProvider};
use reels_llm::{CompletionRequest, CompletionResponse, LlmProvider};
use reels_tts::{SpeechResponse, TtsError, TtsProvider};

type Respond = dyn Fn(&CompletionRequest) -> reels_llm::Result<String> + Send + Sync;
type Delay = dyn Fn(&CompletionRequest) -> Duration + Send + Sync;

pub struct FakeLlm {
    respond: Box<Respond>,
    delay: Box<Delay>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeLlm {
    pub fn new(respond: impl Fn(&CompletionRequest) -> reels_llm::Result<String> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            delay: Box::new(|_| Duration::ZERO),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: impl Fn(&CompletionRequest) -> Duration + Send + Sync + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    fn name(&self) -> &str {
        "fake-llm"
    }

    async fn complete(&self, request: &CompletionRequest) -> reels_llm::Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = (self.delay)(request);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        (self.respond)(request).map(|text| CompletionResponse {
            text,
            model: "fake-model".into(),
        })
    }
}

/// Speech fake returning a few mp3 bytes
#[derive(Default)]
pub struct FakeTts {
    /// Fail any narration containing this text
    pub fail_on: Option<String>,
    /// Sleep before answering
    pub delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeTts {
    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_owned()),
            ..Self::default()
        }
    }

    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsProvider for FakeTts {
    async fn synthesize(&self, text: &str) -> reels_tts::Result<SpeechResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_on.as_deref().is_some_and(|needle| text.contains(needle)) {
            return Err(TtsError::ProviderApiError {
                status: 503,
                message: "speech backend overloaded".into(),
            });
        }

        Ok(SpeechResponse::Audio {
            bytes: b"ID3".to_vec(),
            content_type: "audio/mpeg".into(),
        })
    }

    fn name(&self) -> &str {
        "fake-tts"
    }
}

/// Image fake returning a URL derived from the prompt
#[derive(Default)]
pub struct FakeImages {
    /// Fail any prompt containing this text
    pub fail_on: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeImages {
    pub fn failing_on(text: &str) -> Self {
        Self {
            fail_on: Some(text.to_owned()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn url_for(prompt: &str) -> String {
        format!("https://img.test/{}.png", prompt.replace(' ', "-"))
    }
}

#[async_trait]
impl ImageGenProvider for FakeImages {
    async fn generate(&self, prompt: &str) -> reels_imagegen::Result<GeneratedImage> {
        self.prompts.lock().unwrap().push(prompt.to_owned());

        if self.fail_on.as_deref().is_some_and(|needle| prompt.contains(needle)) {
            return Err(ImageGenError::ProviderApiError {
                status: 400,
                message: "content policy violation".into(),
            });
        }

        Ok(GeneratedImage::Url(Self::url_for(prompt)))
    }

    fn name(&self) -> &str {
        "fake-images"
    }
}

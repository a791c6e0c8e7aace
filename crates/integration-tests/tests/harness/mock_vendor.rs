//! Mock vendor backend for integration tests
//!
//! Serves the three OpenAI-style endpoints the pipeline calls: chat
//! completions, speech and image generation. Chat answers depend on which
//! pipeline prompt arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Fenced subtopic list for the topic "black holes"
pub const BLACK_HOLES: &str =
    "```json\n[\"Event Horizons\", \"Hawking Radiation\", \"Spaghettification\"]\n```";

/// How the mock answers
#[derive(Clone)]
pub struct Behavior {
    /// Raw completion returned for subtopic requests
    pub subtopics: String,
    /// Fail every chat completion with 500
    pub fail_chat: bool,
    /// Fail speech requests whose input contains this text
    pub fail_speech_on: Option<String>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            subtopics: BLACK_HOLES.to_owned(),
            fail_chat: false,
            fail_speech_on: None,
        }
    }
}

/// Mock vendor that returns predictable responses
pub struct MockVendor {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    chat_count: AtomicU32,
    speech_count: AtomicU32,
    image_count: AtomicU32,
}

impl MockVendor {
    /// Start the mock with default behavior
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::default()).await
    }

    /// Start a mock that returns `raw` for the subtopic request
    pub async fn start_with_subtopics(raw: &str) -> anyhow::Result<Self> {
        Self::start_with(Behavior {
            subtopics: raw.to_owned(),
            ..Behavior::default()
        })
        .await
    }

    pub async fn start_with(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            chat_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            image_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/v1/audio/speech", routing::post(handle_speech))
            .route("/v1/images/generations", routing::post(handle_images))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since providers append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    pub fn image_count(&self) -> u32 {
        self.state.image_count.load(Ordering::Relaxed)
    }
}

impl Drop for MockVendor {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Text between the first pair of double quotes
fn quoted(text: &str) -> &str {
    text.split('"').nth(1).unwrap_or_default()
}

async fn handle_chat_completions(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.chat_count.fetch_add(1, Ordering::Relaxed);

    if state.behavior.fail_chat {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"message": "mock failure", "type": "server_error"}})),
        )
            .into_response();
    }

    let prompt = body["messages"]
        .as_array()
        .and_then(|messages| messages.iter().rev().find(|m| m["role"] == "user"))
        .and_then(|message| message["content"].as_str())
        .unwrap_or_default();

    let content = if prompt.contains("related subtopics") {
        state.behavior.subtopics.clone()
    } else if prompt.contains("30-second video") {
        format!("{} explained in nine short words for you", quoted(prompt))
    } else {
        format!("Illustration of {}", quoted(prompt))
    };

    Json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": body["model"],
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 10, "total_tokens": 20}
    }))
    .into_response()
}

async fn handle_speech(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    state.speech_count.fetch_add(1, Ordering::Relaxed);

    let input = body["input"].as_str().unwrap_or_default();
    if state
        .behavior
        .fail_speech_on
        .as_deref()
        .is_some_and(|needle| input.contains(needle))
    {
        return (StatusCode::SERVICE_UNAVAILABLE, "speech backend overloaded").into_response();
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], b"ID3".to_vec()).into_response()
}

async fn handle_images(State(state): State<Arc<MockState>>, Json(_body): Json<Value>) -> Response {
    let n = state.image_count.fetch_add(1, Ordering::Relaxed);

    Json(json!({
        "created": 1_700_000_000,
        "data": [{"url": format!("https://img.test/{n}.png")}]
    }))
    .into_response()
}

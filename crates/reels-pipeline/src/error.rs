use http::StatusCode;
use reels_imagegen::ImageGenError;
use reels_llm::LlmError;
use reels_tts::TtsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReelError>;

/// Failures surfaced by the reel pipeline
#[derive(Debug, Error)]
pub enum ReelError {
    /// No usable topic in the request
    #[error("Topic is required")]
    InvalidInput,

    /// A generation response could not be read as the expected shape
    #[error("unexpected response format: {0}")]
    UpstreamFormat(String),

    /// A vendor call failed or timed out
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Every subtopic failed
    #[error("Failed to generate any valid reels")]
    NoValidReels,

    #[error("{0}")]
    Internal(String),
}

impl ReelError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to API consumers
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Topic is required",
            Self::UpstreamFormat(_) => "Failed to parse related topics",
            Self::NoValidReels => "Failed to generate any valid reels",
            Self::UpstreamUnavailable(_) | Self::Internal(_) => "Internal server error",
        }
    }

    /// Extra detail for the catch-all case
    ///
    /// Format failures carry raw upstream text and never leave the process.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::UpstreamUnavailable(message) | Self::Internal(message) => Some(message),
            _ => None,
        }
    }
}

impl From<LlmError> for ReelError {
    fn from(err: LlmError) -> Self {
        if err.is_format_error() {
            Self::UpstreamFormat(err.to_string())
        } else {
            Self::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<TtsError> for ReelError {
    fn from(err: TtsError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

impl From<ImageGenError> for ReelError {
    fn from(err: ImageGenError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

#[cfg(feature = "http")]
mod response {
    use axum::{
        Json,
        response::{IntoResponse, Response},
    };
    use serde::Serialize;

    use super::ReelError;

    /// Error envelope returned by the generate-reels endpoint
    #[derive(Debug, Serialize)]
    struct ErrorResponse<'a> {
        error: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<&'a str>,
    }

    impl IntoResponse for ReelError {
        fn into_response(self) -> Response {
            let body = ErrorResponse {
                error: self.client_message(),
                details: self.details(),
            };

            (self.status_code(), Json(body)).into_response()
        }
    }
}

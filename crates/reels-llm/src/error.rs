use thiserror::Error;

pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while requesting a completion
#[derive(Debug, Error)]
pub enum LlmError {
    /// Named provider does not exist in configuration
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Request never reached the provider or the connection dropped
    #[error("connection error: {0}")]
    Connection(String),

    /// Provider rejected the API key
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider answered with a non-success status
    #[error("provider API error ({status}): {message}")]
    ProviderApi { status: u16, message: String },

    /// Provider answered 2xx but the body had no usable completion text
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// Whether the provider responded but in an unexpected shape
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// Map a non-success HTTP status to an error
    pub(crate) fn from_status(status: http::StatusCode, body: String) -> Self {
        match status.as_u16() {
            401 | 403 => Self::AuthenticationFailed(body),
            code => Self::ProviderApi { status: code, message: body },
        }
    }
}

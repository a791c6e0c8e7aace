use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Vendor rejected the request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed (missing or invalid API key)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider not found in configuration
    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider is missing required settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// External synthesis program failed or produced no audio
    #[error("Synthesis command failed: {0}")]
    CommandFailed(String),

    /// Provider answered but the audio could not be read
    #[error("Failed to read synthesized audio: {0}")]
    InvalidAudio(String),
}

impl TtsError {
    /// Map a non-success vendor status to an error
    pub(crate) fn from_status(status: http::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(message),
            400 => Self::InvalidRequest(message),
            code => Self::ProviderApiError { status: code, message },
        }
    }
}

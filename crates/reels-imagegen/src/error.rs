use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImageGenError>;

/// Image generation errors
#[derive(Debug, Error)]
pub enum ImageGenError {
    /// Invalid request parameters
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

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Provider answered 2xx without a usable image
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

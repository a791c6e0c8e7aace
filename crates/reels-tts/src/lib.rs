#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod registry;
mod types;

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use registry::TtsRegistry;
pub use types::SpeechResponse;

//! Language generation adapters for ResearchReels
//!
//! A single [`LlmProvider`] contract over OpenAI-compatible chat completion
//! APIs (including NVIDIA NIM) and the Anthropic Messages API. Providers are
//! built from configuration and looked up by name through [`LlmRegistry`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod error;
mod http_client;
pub mod protocol;
pub mod provider;
mod registry;
pub mod types;

pub use error::{LlmError, Result};
pub use provider::LlmProvider;
pub use registry::LlmRegistry;
pub use types::{CompletionRequest, CompletionResponse};

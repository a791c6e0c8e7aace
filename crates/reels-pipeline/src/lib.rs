//! Reel generation pipeline for ResearchReels
//!
//! A topic becomes a short list of subtopics; each subtopic becomes a reel
//! with a narration script, synthesized speech and a few illustrations.
//! Language, speech and image providers are injected through [`Adapters`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod deadline;
pub mod error;
pub mod image_prompts;
pub mod media;
mod pipeline;
pub mod prompts;
mod reel;
mod settings;
pub mod subtopics;

#[cfg(test)]
mod testing;

pub use error::{ReelError, Result};
pub use image_prompts::{ImagePromptDeriver, chunk_words};
pub use pipeline::{Adapters, ReelPipeline};
pub use reel::Reel;
pub use settings::PipelineSettings;

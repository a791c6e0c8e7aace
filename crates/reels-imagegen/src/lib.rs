#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod http_client;
mod provider;
mod registry;
mod types;

pub use error::{ImageGenError, Result};
pub use provider::ImageGenProvider;
pub use registry::ImageGenRegistry;
pub use types::GeneratedImage;

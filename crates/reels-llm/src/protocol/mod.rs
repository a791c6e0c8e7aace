//! Vendor wire formats and their conversion to and from the neutral types

pub mod anthropic;
pub mod openai;

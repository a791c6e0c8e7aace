/// Provider-neutral completion request
///
/// The model is not part of the request: each provider is bound to the
/// model named in its configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionRequest {
    /// User prompt
    pub prompt: String,
    /// Optional system instruction
    pub system: Option<String>,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f64>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Completion text normalized out of whichever vendor shape produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub text: String,
    /// Model reported by the vendor, or the configured model
    pub model: String,
}

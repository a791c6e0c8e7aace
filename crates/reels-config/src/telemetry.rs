pub mod exporters;

use std::collections::HashMap;

use serde::Deserialize;

use self::exporters::ExporterConfig;

/// Telemetry configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Service name for telemetry metadata
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Additional resource attributes
    #[serde(default)]
    pub resource_attributes: HashMap<String, String>,
    /// Default exporter shared by tracing and metrics
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
    #[serde(default)]
    pub tracing: Option<TracingConfig>,
    #[serde(default)]
    pub metrics: Option<MetricsConfig>,
}

/// Tracing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    /// Sampling rate (0.0 to 1.0)
    #[serde(default = "default_sampling_rate")]
    pub sampling_rate: f64,
    /// Use parent-based sampler
    #[serde(default = "default_true")]
    pub parent_based: bool,
    /// Override the default exporter for tracing
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

/// Metrics configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    /// Override the default exporter for metrics
    #[serde(default)]
    pub exporter: Option<ExporterConfig>,
}

fn default_service_name() -> String {
    "research-reels".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_sampling_rate() -> f64 {
    1.0
}

#[allow(clippy::missing_const_for_fn)]
fn default_true() -> bool {
    true
}

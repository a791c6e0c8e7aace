use serde::Deserialize;
use url::Url;

/// OTLP exporter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    /// OTLP endpoint URL
    pub endpoint: Url,
    /// Export protocol
    #[serde(default)]
    pub protocol: ExportProtocol,
    /// Seconds between metric exports
    #[serde(default = "default_export_interval")]
    pub export_interval: u64,
}

/// OTLP export protocol
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportProtocol {
    /// gRPC (default)
    #[default]
    Grpc,
    /// HTTP/protobuf
    HttpProto,
}

const fn default_export_interval() -> u64 {
    30
}

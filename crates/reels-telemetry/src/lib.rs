//! Telemetry for ResearchReels
//!
//! Log output through `tracing-subscriber`, with optional OTLP export of
//! traces and pipeline metrics

mod metadata;
pub mod metrics;

use std::time::Duration;

use opentelemetry::global;
use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use reels_config::TelemetryConfig;
use reels_config::telemetry::exporters::{ExportProtocol, ExporterConfig};

pub use metrics::PipelineMetrics;

/// Keeps exporters alive and shuts them down on drop
pub struct TelemetryGuard {
    meter_provider: Option<SdkMeterProvider>,
    tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    /// Push pending metrics out immediately
    ///
    /// # Errors
    ///
    /// Returns an error if the meter provider fails to flush
    pub fn force_flush(&self) -> anyhow::Result<()> {
        if let Some(ref provider) = self.meter_provider {
            provider
                .force_flush()
                .map_err(|e| anyhow::anyhow!("failed to flush metrics: {e}"))?;
        }
        Ok(())
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if let Some(provider) = self.meter_provider.take()
            && let Err(e) = provider.shutdown()
        {
            tracing::warn!(error = %e, "failed to shutdown meter provider");
        }
        if let Some(provider) = self.tracer_provider.take()
            && let Err(e) = provider.shutdown()
        {
            tracing::warn!(error = %e, "failed to shutdown tracer provider");
        }
    }
}

/// Initialize logging and, when configured, OTLP export
///
/// The returned guard must be held for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if an OTLP exporter cannot be built
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) -> anyhow::Result<TelemetryGuard> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let mut guard = TelemetryGuard {
        meter_provider: None,
        tracer_provider: None,
    };

    match config {
        Some(telemetry_config) if has_exporter(telemetry_config) => {
            let resource = metadata::build_resource(telemetry_config);

            if let Some(exporter) = metrics_exporter(telemetry_config) {
                let meter_provider = init_metrics(exporter, resource.clone())?;
                global::set_meter_provider(meter_provider.clone());
                guard.meter_provider = Some(meter_provider);
            }

            let otel_layer = match tracing_exporter(telemetry_config) {
                Some(exporter) => {
                    let tracer_provider = init_tracer(telemetry_config, exporter, resource)?;
                    let tracer = tracer_provider.tracer("research-reels");
                    global::set_tracer_provider(tracer_provider.clone());
                    guard.tracer_provider = Some(tracer_provider);
                    Some(tracing_opentelemetry::layer().with_tracer(tracer))
                }
                None => None,
            };

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .with(otel_layer)
                .init();

            tracing::info!(
                service = %telemetry_config.service_name,
                traces = tracing_exporter(telemetry_config).map(|e| e.endpoint.as_str()),
                metrics = metrics_exporter(telemetry_config).map(|e| e.endpoint.as_str()),
                "OTLP export enabled"
            );
        }
        _ => {
            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }

    Ok(guard)
}

fn has_exporter(config: &TelemetryConfig) -> bool {
    tracing_exporter(config).is_some() || metrics_exporter(config).is_some()
}

fn tracing_exporter(config: &TelemetryConfig) -> Option<&ExporterConfig> {
    config
        .tracing
        .as_ref()
        .and_then(|t| t.exporter.as_ref())
        .or(config.exporter.as_ref())
}

fn metrics_exporter(config: &TelemetryConfig) -> Option<&ExporterConfig> {
    config
        .metrics
        .as_ref()
        .and_then(|m| m.exporter.as_ref())
        .or(config.exporter.as_ref())
}

fn init_metrics(exporter_config: &ExporterConfig, resource: opentelemetry_sdk::Resource) -> anyhow::Result<SdkMeterProvider> {
    use opentelemetry_otlp::{MetricExporter, WithExportConfig};
    use opentelemetry_sdk::metrics::PeriodicReader;

    let exporter = match exporter_config.protocol {
        ExportProtocol::Grpc => MetricExporter::builder()
            .with_tonic()
            .with_endpoint(exporter_config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build gRPC metrics exporter: {e}"))?,
        ExportProtocol::HttpProto => MetricExporter::builder()
            .with_http()
            .with_endpoint(exporter_config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP metrics exporter: {e}"))?,
    };

    let reader = PeriodicReader::builder(exporter)
        .with_interval(Duration::from_secs(exporter_config.export_interval))
        .build();

    Ok(SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build())
}

fn init_tracer(
    config: &TelemetryConfig,
    exporter_config: &ExporterConfig,
    resource: opentelemetry_sdk::Resource,
) -> anyhow::Result<SdkTracerProvider> {
    use opentelemetry_otlp::{SpanExporter, WithExportConfig};
    use opentelemetry_sdk::trace::Sampler;

    let exporter = match exporter_config.protocol {
        ExportProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(exporter_config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build gRPC span exporter: {e}"))?,
        ExportProtocol::HttpProto => SpanExporter::builder()
            .with_http()
            .with_endpoint(exporter_config.endpoint.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build HTTP span exporter: {e}"))?,
    };

    let sampling_rate = config.tracing.as_ref().map_or(1.0, |t| t.sampling_rate);
    let sampler = if sampling_rate >= 1.0 {
        Sampler::AlwaysOn
    } else if sampling_rate <= 0.0 {
        Sampler::AlwaysOff
    } else {
        Sampler::TraceIdRatioBased(sampling_rate)
    };

    let sampler = if config.tracing.as_ref().is_none_or(|t| t.parent_based) {
        Sampler::ParentBased(Box::new(sampler))
    } else {
        sampler
    };

    Ok(SdkTracerProvider::builder()
        .with_resource(resource)
        .with_sampler(sampler)
        .with_batch_exporter(exporter)
        .build())
}

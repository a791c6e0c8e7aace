//! Reel pipeline instruments

use std::time::Instant;

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};

pub const REELS_REQUEST_DURATION: &str = "reels.request.duration";
pub const REELS_GENERATED: &str = "reels.generated";
pub const REELS_UNIT_FAILURES: &str = "reels.unit.failures";

/// Instruments recorded by the reel pipeline
///
/// Resolved from the global meter provider, so they are no-ops until
/// [`crate::init`] installs an exporter.
#[derive(Clone)]
pub struct PipelineMetrics {
    request_duration: Histogram<f64>,
    generated: Counter<u64>,
    unit_failures: Counter<u64>,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        let meter = global::meter("research-reels");

        Self {
            request_duration: meter
                .f64_histogram(REELS_REQUEST_DURATION)
                .with_unit("s")
                .with_description("Time to turn one topic into reels")
                .build(),
            generated: meter
                .u64_counter(REELS_GENERATED)
                .with_description("Reels returned to callers")
                .build(),
            unit_failures: meter
                .u64_counter(REELS_UNIT_FAILURES)
                .with_description("Subtopics dropped because a stage failed")
                .build(),
        }
    }

    /// Record a finished request and how many reels it produced
    pub fn record_request(&self, start: Instant, reels: usize) {
        let outcome = if reels == 0 { "failure" } else { "success" };
        self.request_duration
            .record(start.elapsed().as_secs_f64(), &[KeyValue::new("outcome", outcome)]);
        self.generated.add(reels as u64, &[]);
    }

    /// Record one dropped subtopic
    pub fn record_unit_failure(&self, stage: &'static str) {
        self.unit_failures.add(1, &[KeyValue::new("stage", stage)]);
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

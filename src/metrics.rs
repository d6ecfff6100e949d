//! Prometheus metrics for request tracking.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// Conversions performed counter metric name.
pub const METRIC_CONVERSIONS: &str = "conversions_total";
/// Conversion failures counter metric name.
pub const METRIC_CONVERSION_FAILURES: &str = "conversion_failures_total";
/// Rejected requests counter metric name.
pub const METRIC_REQUESTS_REJECTED: &str = "requests_rejected_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
///
/// Call this once at startup. The returned handle renders the text
/// exposition for the `/metrics` endpoint.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

/// Register metric descriptions with the installed recorder.
pub fn describe_metrics() {
    describe_counter!(
        METRIC_CONVERSIONS,
        "Total number of successful temperature conversions"
    );
    describe_counter!(
        METRIC_CONVERSION_FAILURES,
        "Total number of conversions rejected for an invalid scale pair"
    );
    describe_counter!(
        METRIC_REQUESTS_REJECTED,
        "Total number of requests rejected for malformed input"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Record HTTP request latency for an endpoint.
pub fn record_http_latency(start: Instant, endpoint: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_HTTP_REQUEST_LATENCY, "endpoint" => endpoint.to_string()).record(latency_ms);
}

/// Increment the conversions counter for a scale pair.
pub fn inc_conversions(scale: &str, target_scale: &str) {
    counter!(
        METRIC_CONVERSIONS,
        "scale" => scale.to_string(),
        "target_scale" => target_scale.to_string()
    )
    .increment(1);
}

/// Increment the conversion failures counter.
pub fn inc_conversion_failures() {
    counter!(METRIC_CONVERSION_FAILURES).increment(1);
}

/// Increment the rejected requests counter.
pub fn inc_requests_rejected() {
    counter!(METRIC_REQUESTS_REJECTED).increment(1);
}

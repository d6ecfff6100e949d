//! HTTP API handlers.

use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::convert_temperature;
use crate::error::RequestError;
use crate::metrics;

/// API version reported by the root endpoint.
///
/// Fixed contract value, independent of the crate version.
pub const API_VERSION: &str = "1.0";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Handle for rendering the Prometheus text exposition.
    metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self { metrics }
    }

    /// Render the current metrics snapshot.
    pub fn render_metrics(&self) -> String {
        self.metrics.render()
    }
}

/// Version response.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    /// API version string.
    pub version: &'static str,
}

/// Query parameters for the conversion endpoint.
///
/// `temp` is kept as a string so a non-numeric value can be reported with
/// our own error body instead of the extractor's plain-text rejection.
#[derive(Debug, Deserialize)]
pub struct ConvertTempParams {
    /// Temperature value to convert.
    pub temp: String,
    /// Scale the input temperature is in.
    pub scale: String,
    /// Scale to convert to.
    pub target_scale: String,
}

/// Successful conversion response.
#[derive(Debug, Serialize)]
pub struct ConvertTempResponse {
    /// Converted temperature value.
    pub converted_temp: f64,
    /// Target scale, lowercased.
    pub target_scale: String,
}

/// Version handler - always returns 200.
pub async fn version() -> impl IntoResponse {
    Json(VersionResponse {
        version: API_VERSION,
    })
}

/// Conversion handler.
///
/// Lowercases the scale names, parses `temp`, and delegates to
/// [`convert_temperature`]. All input problems map to 400 with a JSON
/// error body.
pub async fn convert_temp(
    params: Result<Query<ConvertTempParams>, QueryRejection>,
) -> Result<Json<ConvertTempResponse>, RequestError> {
    let start = Instant::now();

    let Query(params) = params.map_err(|rejection| {
        metrics::inc_requests_rejected();
        RequestError::MalformedQuery(rejection.body_text())
    })?;

    let temp: f64 = params.temp.trim().parse().map_err(|_| {
        metrics::inc_requests_rejected();
        RequestError::NonNumericTemp
    })?;

    let scale = params.scale.to_lowercase();
    let target_scale = params.target_scale.to_lowercase();

    let result = match convert_temperature(temp, &scale, &target_scale) {
        Some(converted_temp) => {
            metrics::inc_conversions(&scale, &target_scale);
            Ok(Json(ConvertTempResponse {
                converted_temp,
                target_scale,
            }))
        }
        None => {
            debug!(%scale, %target_scale, "unrecognized scale pair");
            metrics::inc_conversion_failures();
            Err(RequestError::InvalidScalePair)
        }
    };

    metrics::record_http_latency(start, "/convert-temp");
    result
}

/// Metrics handler - Prometheus text exposition.
pub async fn serve_metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.render_metrics()
}

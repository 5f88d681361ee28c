//! Prometheus metrics middleware exposing `/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

const METRICS_NAMESPACE: &str = "pharmacy";
const METRICS_ENDPOINT: &str = "/metrics";

/// Build the request metrics middleware.
///
/// # Errors
/// Returns [`std::io::Error`] when the collectors cannot be registered.
pub(crate) fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_ENDPOINT)
        .build()
        .map_err(|error| std::io::Error::other(format!("metrics registration failed: {error}")))
}

//! Prometheus request metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;

/// Global Prometheus middleware, shared by every worker.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("theater")
        .endpoint("/metrics") // exposed URL
        .build()
        .expect("metrics builder")
});

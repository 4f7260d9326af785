//! Metrics collection and exposition.
//!
//! # Metrics
//! - `www_requests_total` (counter): requests by tenant, handler, status
//! - `www_request_duration_seconds` (histogram): dispatch latency
//!
//! Recording is a no-op until a recorder is installed, so tests and the
//! route CLI pay nothing.

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(tenant: &str, handler: &str, status: u16, start: Instant) {
    let status = status.to_string();
    metrics::counter!(
        "www_requests_total",
        "tenant" => tenant.to_string(),
        "handler" => handler.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    metrics::histogram!(
        "www_request_duration_seconds",
        "tenant" => tenant.to_string(),
        "handler" => handler.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

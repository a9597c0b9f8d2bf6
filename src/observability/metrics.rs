//! Metrics collection and exposition.
//!
//! # Metrics
//! - `forwarded_prefix_requests_total` (counter): requests by prefix outcome
//!   (`passthrough`, `mounted`, `already_applied`, `link_only`)
//!
//! A high `link_only` share usually means clients bypass the proxy or the
//! configured fallback is stale.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

pub const PREFIX_REQUESTS_TOTAL: &str = "forwarded_prefix_requests_total";

/// Start the Prometheus scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_prefix_outcome(outcome: &'static str) {
    metrics::counter!(PREFIX_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
}

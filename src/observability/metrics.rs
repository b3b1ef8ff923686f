//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define the per-route instruments (requests, latency, errors)
//! - Expose a Prometheus-compatible metrics endpoint
//!
//! # Metrics
//! - `catalog_requests_total` (counter): total requests by route and status
//! - `catalog_request_duration_seconds` (histogram): latency by route
//! - `catalog_request_errors_total` (counter): error outcomes by route
//!
//! # Design Decisions
//! - Routes are labeled by template ("/courses/{code}"), never by raw path,
//!   to keep label cardinality bounded
//! - Instruments are monotonic for the life of the process

use std::net::SocketAddr;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;

pub const REQUESTS_TOTAL: &str = "catalog_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "catalog_request_duration_seconds";
pub const REQUEST_ERRORS_TOTAL: &str = "catalog_request_errors_total";

/// Install the Prometheus exporter, listening on the given address.
///
/// Failure to install is logged and otherwise ignored; the service keeps
/// running without a metrics endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_instruments();
            tracing::info!(address = %addr, "Prometheus exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Prometheus exporter");
        }
    }
}

/// Register names, units, and help text for the instruments.
pub fn describe_instruments() {
    describe_counter!(REQUESTS_TOTAL, "Total HTTP requests by route and status");
    describe_histogram!(
        REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "Request processing time by route"
    );
    describe_counter!(
        REQUEST_ERRORS_TOTAL,
        "Requests that ended in an error outcome, by route"
    );
}

/// Record one completed request: count it and record its latency.
pub fn record_request(route: &str, status: u16, latency: Duration) {
    counter!(
        REQUESTS_TOTAL,
        "route" => route.to_owned(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(REQUEST_DURATION_SECONDS, "route" => route.to_owned())
        .record(latency.as_secs_f64());
}

/// Record one request that ended in an error outcome.
pub fn record_error(route: &str) {
    counter!(REQUEST_ERRORS_TOTAL, "route" => route.to_owned()).increment(1);
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request passes through the instrumentation middleware, which produces:
//!     → one span        (tracing.rs: OTLP export to the trace collector)
//!     → one log line    (logging.rs: structured JSON or pretty output)
//!     → counter updates (metrics.rs: Prometheus exposition endpoint)
//!
//! Consumers:
//!     → Trace backend (e.g. Jaeger behind an OTLP collector)
//!     → Log aggregation (stdout)
//!     → Metrics scrape (Prometheus)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through span, log line, and response header
//! - Metric updates are cheap (atomic increments behind the metrics facade)
//! - Span export is batched and flushed on shutdown

pub mod logging;
pub mod metrics;
pub mod tracing;

use thiserror::Error;

/// Errors raised while wiring up the observability stack.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to create OTLP span exporter: {0}")]
    Exporter(String),

    #[error("failed to initialize log subscriber: {0}")]
    Subscriber(String),
}

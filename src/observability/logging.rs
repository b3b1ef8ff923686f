//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Attach the OpenTelemetry layer when span export is enabled
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - JSON format for production, pretty format for development
//! - Log level comes from config; RUST_LOG overrides it when set

use opentelemetry_sdk::trace::Tracer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::observability::TelemetryError;

/// Initialize the global log subscriber.
///
/// When a tracer is supplied, request spans are bridged into the
/// OpenTelemetry pipeline alongside the log output.
pub fn init_subscriber(
    config: &ObservabilityConfig,
    tracer: Option<Tracer>,
) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let otel_layer = tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    let registry = tracing_subscriber::registry().with(filter).with(otel_layer);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    result.map_err(|e| TelemetryError::Subscriber(e.to_string()))
}

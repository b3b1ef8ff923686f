//! Distributed tracing support.
//!
//! # Responsibilities
//! - Initialize the OpenTelemetry SDK with an OTLP span exporter
//! - Hand the logging layer a tracer so request spans are exported
//! - Flush buffered spans on shutdown
//!
//! # Design Decisions
//! - Spans are exported through a batch processor on the Tokio runtime
//! - Sampling is configurable; 0.0 and 1.0 short-circuit to Off/On samplers
//! - When tracing is disabled nothing is installed and no tracer is returned

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{Config, RandomIdGenerator, Sampler, Tracer, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};

use crate::config::ObservabilityConfig;
use crate::observability::TelemetryError;

/// Initialize the OTLP trace pipeline.
///
/// Returns the tracer to bridge into the log subscriber, or `None` when
/// span export is disabled in the configuration.
pub fn init_tracer(config: &ObservabilityConfig) -> Result<Option<Tracer>, TelemetryError> {
    if !config.tracing_enabled {
        return Ok(None);
    }

    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(config.otlp_endpoint.clone())
        .build_span_exporter()
        .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

    let resource = Resource::new(vec![KeyValue::new(
        "service.name",
        config.service_name.clone(),
    )]);

    let provider = TracerProvider::builder()
        .with_batch_exporter(exporter, runtime::Tokio)
        .with_config(
            Config::default()
                .with_sampler(sampler_for(config.sampling_ratio))
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .build();

    global::set_tracer_provider(provider.clone());
    let tracer = provider.tracer(config.service_name.clone());

    Ok(Some(tracer))
}

/// Flush pending spans and shut down the provider.
///
/// Call during shutdown so spans buffered by the batch processor reach the
/// collector before the process exits.
pub fn shutdown_tracer() {
    global::shutdown_tracer_provider();
}

fn sampler_for(ratio: f64) -> Sampler {
    if ratio <= 0.0 {
        Sampler::AlwaysOff
    } else if ratio >= 1.0 {
        Sampler::AlwaysOn
    } else {
        Sampler::TraceIdRatioBased(ratio)
    }
}

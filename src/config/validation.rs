//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, sampling ratio in [0, 1])
//! - Check addresses parse before anything tries to bind them
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: CatalogConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::CatalogConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("sampling_ratio {0} is outside the range 0.0 to 1.0")]
    SamplingRatioOutOfRange(f64),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("otlp_endpoint must be set when tracing is enabled")]
    MissingOtlpEndpoint,

    #[error("service_name must not be empty")]
    EmptyServiceName,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let obs = &config.observability;

    if !LOG_LEVELS.contains(&obs.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(obs.log_level.clone()));
    }

    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: obs.metrics_address.clone(),
        });
    }

    if obs.tracing_enabled && obs.otlp_endpoint.trim().is_empty() {
        errors.push(ValidationError::MissingOtlpEndpoint);
    }

    if !(0.0..=1.0).contains(&obs.sampling_ratio) {
        errors.push(ValidationError::SamplingRatioOutOfRange(obs.sampling_ratio));
    }

    if obs.service_name.trim().is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&CatalogConfig::default()), Ok(()));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = CatalogConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.observability.sampling_ratio = 2.0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
        assert!(errors.contains(&ValidationError::InvalidLogLevel("loud".into())));
    }

    #[test]
    fn metrics_address_ignored_when_metrics_disabled() {
        let mut config = CatalogConfig::default();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".into();

        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn otlp_endpoint_required_only_when_tracing_enabled() {
        let mut config = CatalogConfig::default();
        config.observability.otlp_endpoint = String::new();
        assert!(validate_config(&config).is_err());

        config.observability.tracing_enabled = false;
        assert_eq!(validate_config(&config), Ok(()));
    }
}

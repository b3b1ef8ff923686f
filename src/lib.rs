//! Course catalog service with end-to-end request instrumentation.
//!
//! A small course-catalog web application (homepage, catalog, course detail,
//! add-course form) built with Tokio and Axum, instrumented so that every
//! request produces exactly one exported span, one structured log line, and
//! one set of per-route counter updates.
//!
//! # Architecture Overview
//!
//! ```text
//!    Client Request
//!         │
//!         ▼
//!   ┌───────────┐    ┌─────────────────┐    ┌──────────┐    ┌─────────┐
//!   │   http    │───▶│ instrumentation │───▶│ handlers │───▶│ catalog │
//!   │  server   │    │   middleware    │    │ + views  │    │  store  │
//!   └───────────┘    └────────┬────────┘    └──────────┘    └─────────┘
//!                             │
//!            ┌────────────────┼────────────────┐
//!            ▼                ▼                ▼
//!      span (OTLP)      JSON log line      Prometheus
//!      → collector        → stdout         → /metrics
//! ```
//!
//! Cross-cutting concerns: `config` (TOML, validated), `observability`
//! (logging, metrics, trace export), `lifecycle` (graceful shutdown).

// Core subsystems
pub mod catalog;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

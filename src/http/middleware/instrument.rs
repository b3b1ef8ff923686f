//! Request instrumentation middleware.
//!
//! # Responsibilities
//! - Open exactly one server span per request, named by method and route
//! - Record outcome status and latency on the span
//! - Update the per-route request, latency, and error instruments
//! - Emit one structured log line per request
//!
//! # Design Decisions
//! - Routes are identified by their matched template, not the raw path
//! - 404 and 5xx count as error outcomes; a 422 form re-render does not
//! - The handler runs inside the span, so domain log events attach to it

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use crate::observability::metrics;

/// Route label used when no route template matched the request.
const UNMATCHED: &str = "unmatched";

pub async fn instrument_request(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_owned();

    let span = tracing::info_span!(
        "http_request",
        otel.name = %format!("{method} {route}"),
        otel.kind = "server",
        otel.status_code = tracing::field::Empty,
        http.request.method = %method,
        http.route = %route,
        url.path = %path,
        http.response.status_code = tracing::field::Empty,
        request_id = %request_id,
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    let latency = start.elapsed();

    let status = response.status();
    let failed = is_failure(status);

    span.record("http.response.status_code", status.as_u16());
    span.record("otel.status_code", if failed { "ERROR" } else { "OK" });

    metrics::record_request(&route, status.as_u16(), latency);
    if failed {
        metrics::record_error(&route);
    }

    let latency_ms = latency.as_secs_f64() * 1000.0;
    span.in_scope(|| {
        if failed {
            tracing::error!(
                method = %method,
                route = %route,
                path = %path,
                status = status.as_u16(),
                latency_ms,
                request_id = %request_id,
                "request failed"
            );
        } else {
            tracing::info!(
                method = %method,
                route = %route,
                path = %path,
                status = status.as_u16(),
                latency_ms,
                request_id = %request_id,
                "request completed"
            );
        }
    });

    response
}

/// Error outcomes per the service's failure taxonomy: a missing resource or
/// a server-side fault. Validation re-renders (422) are expected traffic.
fn is_failure(status: StatusCode) -> bool {
    status == StatusCode::NOT_FOUND || status.is_server_error()
}

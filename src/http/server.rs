//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, timeout, instrumentation)
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use crate::catalog::CourseStore;
use crate::config::CatalogConfig;
use crate::http::handlers;
use crate::http::middleware::instrument_request;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CourseStore>,
}

/// HTTP server for the course catalog.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: &CatalogConfig, store: Arc<CourseStore>) -> Self {
        let state = AppState { store };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order matters: request IDs are assigned outermost so the
    /// instrumentation span can pick them up, and the timeout sits inside
    /// the instrumentation so a timed-out request still produces its span,
    /// log line, and counter updates.
    fn build_router(config: &CatalogConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route(
                "/courses",
                get(handlers::course_catalog).post(handlers::add_course),
            )
            .route("/courses/new", get(handlers::add_course_form))
            .route("/courses/{code}", get(handlers::course_details))
            .route("/health", get(handlers::health))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(axum::middleware::from_fn(instrument_request))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

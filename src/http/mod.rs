//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/instrument.rs (span, log line, counters)
//!     → handlers.rs (catalog operations)
//!     → views.rs (HTML rendering)
//!     → response to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod views;

pub use server::{AppState, HttpServer};

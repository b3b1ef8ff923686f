use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use course_catalog::catalog::CourseStore;
use course_catalog::config::{load_config, CatalogConfig};
use course_catalog::http::HttpServer;
use course_catalog::lifecycle::Shutdown;
use course_catalog::observability;

#[derive(Parser)]
#[command(name = "course-catalog")]
#[command(about = "Instrumented course catalog web service", long_about = None)]
struct Args {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => load_config(&path)?,
        None => CatalogConfig::default(),
    };

    let tracer = observability::tracing::init_tracer(&config.observability)?;
    observability::logging::init_subscriber(&config.observability, tracer)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        tracing_enabled = config.observability.tracing_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let store = Arc::new(CourseStore::with_seed_catalog());
    tracing::info!(courses_count = store.len(), "Seed catalog loaded");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.listen_for_ctrl_c();

    let server = HttpServer::new(&config, store);
    server.run(listener, shutdown.subscribe()).await?;

    // Flush buffered spans before exiting.
    observability::tracing::shutdown_tracer();

    tracing::info!("Shutdown complete");
    Ok(())
}

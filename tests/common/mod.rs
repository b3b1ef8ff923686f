//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tokio::net::TcpListener;

use course_catalog::catalog::CourseStore;
use course_catalog::config::CatalogConfig;
use course_catalog::http::HttpServer;
use course_catalog::lifecycle::Shutdown;

/// A catalog service running on an ephemeral local port.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<CourseStore>,
    // Held so the server drains only when the test finishes.
    _shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Boot the real server with the seed catalog; exporters stay disabled so
/// tests observe metrics through the recorder handle instead.
pub async fn spawn_app() -> TestApp {
    let mut config = CatalogConfig::default();
    config.observability.tracing_enabled = false;
    config.observability.metrics_enabled = false;

    let store = Arc::new(CourseStore::with_seed_catalog());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(&config, store.clone());
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    TestApp {
        addr,
        store,
        _shutdown: shutdown,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[allow(dead_code)]
static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder once per test binary and return a handle
/// for scraping the rendered exposition text.
#[allow(dead_code)]
pub fn metrics_handle() -> PrometheusHandle {
    RECORDER
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("install prometheus recorder")
        })
        .clone()
}

/// Sum the values of all samples of `name` whose label set includes every
/// `(key, value)` pair. Returns 0.0 when no sample matches.
#[allow(dead_code)]
pub fn sample_value(rendered: &str, name: &str, labels: &[(&str, &str)]) -> f64 {
    let braced = format!("{name}{{");
    let bare = format!("{name} ");
    rendered
        .lines()
        .filter(|line| line.starts_with(&braced) || line.starts_with(&bare))
        .filter(|line| {
            labels
                .iter()
                .all(|(key, value)| line.contains(&format!("{key}=\"{value}\"")))
        })
        .filter_map(|line| line.rsplit(' ').next()?.parse::<f64>().ok())
        .sum()
}

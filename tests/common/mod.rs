//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log_demo_server::config::ServerConfig;
use log_demo_server::observability::{LogLevel, Logger, MemorySink};
use log_demo_server::{HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A server running on an ephemeral port with captured log output.
pub struct TestServer {
    pub addr: SocketAddr,
    pub sink: Arc<MemorySink>,
    pub shutdown: Shutdown,
    pub handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server for `environment` (the `NODE_ENV` value).
pub async fn start_server(environment: &str) -> TestServer {
    let mut config = ServerConfig::default();
    config.listener.host = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.logging.environment = environment.to_string();

    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new(LogLevel::threshold_for(environment), sink.clone());

    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::with_logger(config, logger);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    // The startup record is written before serving begins.
    for _ in 0..50 {
        if !sink.lines().is_empty() || environment == "PRODUCTION" {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    TestServer {
        addr,
        sink,
        shutdown,
        handle,
    }
}

/// Client that never reuses connections.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

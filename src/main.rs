//! Leveled Logging Demo Backend
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace layer ─▶ trace_request ─▶ route table
//!                                                  (DEV record)     │
//!                                                                   ├─ GET /
//!                                                                   ├─ GET /healthz
//!                                                                   └─ GET /generate-logs
//!                                                                        (10 random records)
//!
//!     Logger: threshold from NODE_ENV, ERROR/WARN → stderr, rest → stdout
//! ```

use tokio::net::TcpListener;

use log_demo_server::config;
use log_demo_server::observability::diagnostics;
use log_demo_server::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    diagnostics::init_tracing();

    tracing::info!("log-demo-server v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        environment = %config.logging.environment,
        threshold = %config.logging.threshold(),
        "Configuration loaded"
    );

    // Bind failure is fatal
    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let _signal_task = shutdown.trigger_on_signal();

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

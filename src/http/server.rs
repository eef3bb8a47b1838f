//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three handlers
//! - Wrap it in request tracing so every request is recorded before routing
//! - Wire up request IDs and tower-http spans
//! - Serve on a bound listener until shutdown

use std::sync::{Arc, Mutex};

use axum::{middleware, routing::get, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Layer;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::handlers::{generate_logs, healthz, root};
use crate::http::middleware::trace_request;
use crate::http::request::UuidRequestId;
use crate::observability::Logger;

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub logger: Logger,
    pub rng: Arc<Mutex<StdRng>>,
    pub max_body_size: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig, logger: Logger) -> Self {
        let rng = match config.demo.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            logger,
            rng: Arc::new(Mutex::new(rng)),
            max_body_size: config.security.max_body_size,
        }
    }
}

/// HTTP server for the logging backend.
pub struct HttpServer {
    router: Router,
    logger: Logger,
}

impl HttpServer {
    /// Create a server that logs to the console.
    pub fn new(config: ServerConfig) -> Self {
        let logger = Logger::from_config(&config.logging);
        Self::with_logger(config, logger)
    }

    /// Create a server around an already built logger.
    pub fn with_logger(config: ServerConfig, logger: Logger) -> Self {
        let state = AppState::new(&config, logger.clone());
        let router = Self::build_router(state);
        Self { router, logger }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The route table sits behind `trace_request` as a fallback service, so
    /// tracing runs before route matching and also covers unknown paths.
    fn build_router(state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(root))
            .route("/generate-logs", get(generate_logs))
            .route("/healthz", get(healthz))
            .with_state(state.clone());

        let traced = middleware::from_fn_with_state(state, trace_request).layer(routes);

        Router::new()
            .fallback_service(traced)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for serving or for driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            threshold = %self.logger.threshold(),
            "HTTP server starting"
        );

        self.logger
            .info(&format!("Server running on port {}", addr.port()), None);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

}

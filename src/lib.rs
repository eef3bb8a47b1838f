//! Leveled Logging Demo Backend Library
//!
//! A small HTTP backend with a threshold-filtered console logger:
//! `GET /`, `GET /healthz`, and `GET /generate-logs`, plus a DEV record for
//! every inbound request.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod synthetic;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::{LogLevel, Logger};

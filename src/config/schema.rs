//! Configuration schema definitions.
//!
//! All types derive Serde traits so a config can be logged or embedded, and
//! every section has a default so an empty environment yields a working server.

use serde::{Deserialize, Serialize};

use crate::observability::LogLevel;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Console logger settings.
    pub logging: LoggingConfig,

    /// Request size limits.
    pub security: SecurityConfig,

    /// Synthetic log generator settings.
    pub demo: DemoConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// TCP port. `0` asks the OS for an ephemeral port.
    pub port: u16,
}

impl ListenerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Console logger configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Deployment environment tag. `PRODUCTION` restricts output to errors.
    pub environment: String,
}

impl LoggingConfig {
    pub fn threshold(&self) -> LogLevel {
        LogLevel::threshold_for(&self.environment)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            environment: "SANDBOX".to_string(),
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Largest request body buffered for request tracing, in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 2 * 1024 * 1024, // 2MB
        }
    }
}

/// Synthetic log generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

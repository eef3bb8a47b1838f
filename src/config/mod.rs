//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, NODE_ENV)
//!     → loader.rs (lookup & parse)
//!     → ServerConfig (immutable)
//!     → cloned into the server and logger at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so an empty environment is valid
//! - The variable lookup is injectable so tests never touch the real environment

pub mod loader;
pub mod schema;

pub use loader::{load_from_env, load_with, ConfigError};
pub use schema::{DemoConfig, ListenerConfig, LoggingConfig, SecurityConfig, ServerConfig};

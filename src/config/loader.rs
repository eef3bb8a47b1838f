//! Configuration loading from the process environment.
//!
//! Only two variables are read: `PORT` and `NODE_ENV`.

use crate::config::schema::ServerConfig;

pub const PORT_VAR: &str = "PORT";
pub const ENVIRONMENT_VAR: &str = "NODE_ENV";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Load configuration from the real process environment.
pub fn load_from_env() -> Result<ServerConfig, ConfigError> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to resolve variables.
///
/// Unset and empty variables fall back to defaults.
pub fn load_with<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ServerConfig::default();
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(value) = get(PORT_VAR) {
        config.listener.port = value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
                source,
            })?;
    }

    if let Some(environment) = get(ENVIRONMENT_VAR) {
        config.logging.environment = environment;
    }

    Ok(config)
}

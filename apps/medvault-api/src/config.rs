//! API server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::time::Duration;

use medvault_db::DbConfig;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind host
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Pool size
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection
    pub db_connect_timeout_secs: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ApiConfig {
            host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: lookup("API_PORT")
                .unwrap_or_else(|| "5000".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("API_PORT".to_string()))?,

            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| "./data/medvault.db".to_string()),

            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            db_connect_timeout_secs: lookup("DB_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_CONNECT_TIMEOUT_SECS".to_string()))?,
        };

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("API_HOST".to_string()));
        }
        if config.database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue("DATABASE_PATH".to_string()));
        }
        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Address to bind, e.g. `0.0.0.0:5000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

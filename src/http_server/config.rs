//! HTTP Server Configuration
//!
//! Environment surface: `PORT` (default 8000), `DATABASE_URL` and
//! `DATABASE_NAME`. The database variables are not needed by the
//! in-memory engine; they are recorded so `GET /test` can report whether
//! the deployment has them set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A malformed environment variable.
#[derive(Debug, Clone, Error)]
#[error("invalid {name} value {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Document store connection string, if configured
    #[serde(default)]
    pub database_url: Option<String>,

    /// Document store database name, if configured
    #[serde(default)]
    pub database_name: Option<String>,

    /// CORS allowed origins (empty: allow any origin)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database_url: None,
            database_name: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("PORT") {
            config.port = raw.parse().map_err(|_| ConfigError {
                name: "PORT",
                value: raw,
            })?;
        }
        config.database_url = std::env::var("DATABASE_URL").ok();
        config.database_name = std::env::var("DATABASE_NAME").ok();

        Ok(config)
    }

    /// Create a config with the given port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

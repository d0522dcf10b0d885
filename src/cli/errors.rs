//! CLI errors.

use thiserror::Error;

use crate::http_server::ConfigError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad environment configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Runtime or server I/O failure
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

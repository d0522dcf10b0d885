//! CLI entry: argument parsing, config load and server bring-up.
//!
//! The store handle is constructed here, once, and injected into the
//! operation core; it lives for the process lifetime and is never
//! explicitly torn down.

pub mod args;
pub mod errors;

pub use args::Cli;
pub use errors::{CliError, CliResult};

use crate::api::HospitalApi;
use crate::http_server::{HttpServer, ServerConfig};
use crate::store::MemoryStore;

/// Parse arguments, load configuration and serve until the process
/// exits.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let api = HospitalApi::new(MemoryStore::new());
    let server = HttpServer::new(api, config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

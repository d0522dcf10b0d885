//! CLI argument definitions using clap.
//!
//! Configuration comes from the environment (`PORT`, `DATABASE_URL`,
//! `DATABASE_NAME`); the flags here override it for local runs.

use clap::Parser;

/// mediward - hospital management backend API
#[derive(Parser, Debug)]
#[command(name = "mediward")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host to bind to (overrides the default 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! # HTTP Server
//!
//! Axum transport for the operation core: one route file per API area,
//! all sharing [`AppState`]. Handlers stay thin; validation, integrity
//! checks and workflow live in [`crate::api`].

pub mod admin_routes;
pub mod appointment_routes;
pub mod config;
pub mod health_routes;
pub mod prescription_routes;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use server::{AppState, HttpServer};

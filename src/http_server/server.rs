//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::HospitalApi;
use crate::observability::{log_event, Severity};
use crate::store::DocumentStore;

use super::admin_routes::admin_routes;
use super::appointment_routes::appointment_routes;
use super::config::ServerConfig;
use super::health_routes::health_routes;
use super::prescription_routes::prescription_routes;

/// State shared by every handler: the operation core plus the config
/// surfaced through diagnostics.
pub struct AppState<S> {
    pub api: HospitalApi<S>,
    pub config: ServerConfig,
}

/// HTTP server over an injected document store.
pub struct HttpServer<S> {
    state: Arc<AppState<S>>,
}

impl<S: DocumentStore + 'static> HttpServer<S> {
    pub fn new(api: HospitalApi<S>, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(AppState { api, config }),
        }
    }

    /// Build the combined router with all endpoints
    pub fn router(&self) -> Router {
        let state = self.state.clone();

        let cors = if state.config.cors_origins.is_empty() {
            // No origins configured: allow any, as the original service
            // deployment did.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = state
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Banner and diagnostics at root level
            .merge(health_routes(state.clone()))
            // Entity routes under /api
            .nest(
                "/api",
                admin_routes(state.clone())
                    .merge(appointment_routes(state.clone()))
                    .merge(prescription_routes(state)),
            )
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.state.config.socket_addr()
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bad bind address: {}", e)))?;

        let router = self.router();
        log_event(
            Severity::Info,
            "server.start",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

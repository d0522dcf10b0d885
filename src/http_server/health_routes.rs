//! Banner and diagnostics routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::store::DocumentStore;

use super::server::AppState;

pub fn health_routes<S: DocumentStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/test", get(diagnostics))
        .with_state(state)
}

async fn banner() -> Json<Value> {
    Json(json!({"message": "Hospital Management System API is running"}))
}

/// Report backend/store status and whether the database environment
/// variables are set, without leaking their values.
async fn diagnostics<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Value> {
    let diag = state.api.diagnostics(
        state.config.database_url.is_some(),
        state.config.database_name.is_some(),
    );
    Json(diag)
}

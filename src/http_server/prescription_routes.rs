//! Prescription routes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::api::{ApiError, Created, PrescriptionQuery};
use crate::store::DocumentStore;

use super::server::AppState;

pub fn prescription_routes<S: DocumentStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            "/prescriptions",
            get(list_prescriptions).post(create_prescription),
        )
        .with_state(state)
}

async fn create_prescription<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let created = state.api.create_prescription(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_prescriptions<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<PrescriptionQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.api.list_prescriptions(&query)?))
}

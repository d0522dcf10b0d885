//! Appointment routes: creation, filtered listing and the status
//! workflow transition.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::Value;

use crate::api::{ApiError, AppointmentQuery, Created};
use crate::store::DocumentStore;

use super::server::AppState;

pub fn appointment_routes<S: DocumentStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route(
            "/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route("/appointments/:id", patch(update_status))
        .with_state(state)
}

async fn create_appointment<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let created = state.api.create_appointment(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_appointments<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(query): Query<AppointmentQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.api.list_appointments(&query)?))
}

async fn update_status<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.api.update_appointment_status(&id, &body)?))
}

//! Admin routes: users, doctors and patients.
//!
//! POSTs return `{id}` with 201; creation of a doctor or patient first
//! verifies the referenced user exists (404 otherwise). Lists return
//! every document, serialized with `id` in place of the internal
//! identifier.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::api::{ApiError, Created};
use crate::store::DocumentStore;

use super::server::AppState;

pub fn admin_routes<S: DocumentStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/doctors", get(list_doctors).post(create_doctor))
        .route("/patients", get(list_patients).post(create_patient))
        .with_state(state)
}

async fn create_user<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let created = state.api.create_user(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_users<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.api.list_users()?))
}

async fn create_doctor<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let created = state.api.create_doctor(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_doctors<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.api.list_doctors()?))
}

async fn create_patient<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let created = state.api.create_patient(&body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_patients<S: DocumentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.api.list_patients()?))
}

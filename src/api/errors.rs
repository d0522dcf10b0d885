//! # API Errors
//!
//! The client-facing error taxonomy. Every lower-layer failure converts
//! into one of these variants at the operation boundary; nothing is
//! swallowed or retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::integrity::IntegrityError;
use crate::model::ValidationError;
use crate::store::{InvalidIdentifier, StoreError};
use crate::workflow::WorkflowError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed or out-of-range request field
    #[error("invalid field `{field}`: {reason}")]
    Validation { field: String, reason: String },

    /// Malformed reference id string
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Dangling foreign reference at creation time
    #[error("{0} not found")]
    ReferenceNotFound(&'static str),

    /// Target document absent on update
    #[error("{0} not found")]
    NotFound(&'static str),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Underlying document store unreachable
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::ReferenceNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation {
            field: err.field,
            reason: err.reason,
        }
    }
}

impl From<InvalidIdentifier> for ApiError {
    fn from(err: InvalidIdentifier) -> Self {
        ApiError::InvalidIdentifier(err.0)
    }
}

impl From<IntegrityError> for ApiError {
    fn from(err: IntegrityError) -> Self {
        match err {
            IntegrityError::InvalidIdentifier(e) => e.into(),
            IntegrityError::ReferenceNotFound { entity } => ApiError::ReferenceNotFound(entity),
            IntegrityError::Store(e) => ApiError::Store(e),
        }
    }
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        match err {
            WorkflowError::InvalidIdentifier(e) => e.into(),
            WorkflowError::NotFound => ApiError::NotFound("Appointment"),
            WorkflowError::Store(e) => ApiError::Store(e),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

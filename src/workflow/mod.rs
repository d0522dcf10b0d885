//! # Appointment Workflow Controller
//!
//! Drives the appointment status lifecycle. A transition sets the new
//! status and stamps `updated_at`; no other field changes. Any status
//! may be set from any other (the four values themselves are closed by
//! [`AppointmentStatus`]); no adjacency rule is enforced between states.

use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use crate::model::{Appointment, AppointmentStatus};
use crate::store::{Document, DocumentId, DocumentStore, Filter, InvalidIdentifier, StoreError};

/// Result type for workflow transitions
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Failures while transitioning an appointment.
#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    /// The appointment id string is malformed.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// The id does not resolve to an existing appointment.
    #[error("Appointment not found")]
    NotFound,

    /// The store rejected the read or write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Set the status of the appointment identified by `raw_id` and stamp
/// `updated_at`, returning the updated document.
pub fn set_status<S: DocumentStore>(
    store: &S,
    raw_id: &str,
    status: AppointmentStatus,
) -> WorkflowResult<Document> {
    let id = DocumentId::decode(raw_id)?;

    let mut patch = Document::new();
    patch.insert("status".to_string(), Value::String(status.to_string()));
    patch.insert(
        "updated_at".to_string(),
        Value::String(Utc::now().to_rfc3339()),
    );

    let matched = store.update_one(Appointment::COLLECTION, &id, patch)?;
    if matched == 0 {
        return Err(WorkflowError::NotFound);
    }

    // Re-read so the caller gets the stored state, not a reconstruction.
    store
        .find_one(Appointment::COLLECTION, &Filter::by_id(&id))?
        .ok_or(WorkflowError::NotFound)
}

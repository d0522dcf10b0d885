//! # Referential Integrity Checker
//!
//! A dependent document may only be created once every reference it
//! carries points at an existing document. [`require_exists`] composes
//! the identifier codec with a gateway lookup; callers run it for every
//! reference, in a fixed order, before the insert. A failure aborts the
//! creation with no partial write.
//!
//! The check and the later insert are two independent store operations;
//! nothing in scope deletes documents, so the window between them is a
//! documented but unexercised race.

use thiserror::Error;

use crate::store::{DocumentId, DocumentStore, Filter, InvalidIdentifier, StoreError};

/// Result type for referential checks
pub type IntegrityResult<T> = Result<T, IntegrityError>;

/// A reference that failed to resolve.
#[derive(Debug, Clone, Error)]
pub enum IntegrityError {
    /// The reference string is not a well-formed identifier.
    #[error(transparent)]
    InvalidIdentifier(#[from] InvalidIdentifier),

    /// The decoded identifier has no matching document.
    #[error("{entity} not found")]
    ReferenceNotFound { entity: &'static str },

    /// The lookup itself failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Decode `raw_id` and verify a document with that id exists in
/// `collection`.
///
/// `entity` is the client-facing name used in the not-found message
/// ("User not found", "Patient not found", ...). Returns the decoded id
/// so the caller can reuse it without re-parsing.
pub fn require_exists<S: DocumentStore>(
    store: &S,
    collection: &str,
    entity: &'static str,
    raw_id: &str,
) -> IntegrityResult<DocumentId> {
    let id = DocumentId::decode(raw_id)?;
    match store.find_one(collection, &Filter::by_id(&id))? {
        Some(_) => Ok(id),
        None => Err(IntegrityError::ReferenceNotFound { entity }),
    }
}

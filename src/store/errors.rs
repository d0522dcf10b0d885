//! Document store gateway errors.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a [`DocumentStore`](super::DocumentStore)
/// implementation.
///
/// The gateway never retries; an error here aborts the triggering
/// operation and reaches the client as a 5xx.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The underlying store cannot be reached or is in a broken state.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
}

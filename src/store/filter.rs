//! Exact-match document filters.
//!
//! The API surface only ever queries by equality on top-level fields
//! (`patient_id`, `doctor_id`, `status`, `appointment_id`, `_id`), so a
//! filter is a conjunction of (field, value) terms and nothing more.

use serde_json::Value;

use super::id::DocumentId;
use super::Document;

/// Conjunction of exact-match terms. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    terms: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter matching the document with the given identifier.
    pub fn by_id(id: &DocumentId) -> Self {
        Self::new().eq("_id", id.encode())
    }

    /// Add an equality term.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.push((field.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True when every term matches the document exactly.
    pub fn matches(&self, doc: &Document) -> bool {
        self.terms
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}

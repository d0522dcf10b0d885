//! # Document Store Gateway
//!
//! Thin façade over the persistence engine: collection-scoped insert,
//! find and update operations on schemaless JSON documents. The engine
//! itself is external; [`DocumentStore`] is the seam, and
//! [`MemoryStore`](memory::MemoryStore) is the injected default and the
//! test double.
//!
//! No transactional guarantee spans multiple operations. A referential
//! check followed by an insert is two independent calls.

pub mod errors;
pub mod filter;
pub mod id;
pub mod memory;

pub use errors::{StoreError, StoreResult};
pub use filter::Filter;
pub use id::{DocumentId, InvalidIdentifier};
pub use memory::MemoryStore;

use serde_json::Value;

/// A stored document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, Value>;

/// Collection-scoped document operations.
///
/// Implementations return structural copies, never live references to
/// stored state, and never mutate caller-supplied records beyond the
/// creation metadata added by `insert`.
pub trait DocumentStore: Send + Sync {
    /// Insert a record, returning its newly minted identifier.
    ///
    /// The stored copy gains `_id` (the encoded identifier) and
    /// `created_at` (RFC 3339 timestamp); nothing else is touched.
    fn insert(&self, collection: &str, record: Document) -> StoreResult<DocumentId>;

    /// First document in the collection matching the filter, if any.
    fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// All documents in the collection matching the filter, in insertion
    /// order.
    fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>>;

    /// Shallow-merge `patch` into the document with the given id.
    ///
    /// Returns the matched count (0 or 1, since lookup is by unique
    /// identifier). Callers treat 0 as "not found".
    fn update_one(&self, collection: &str, id: &DocumentId, patch: Document)
        -> StoreResult<u64>;

    /// Names of the non-empty collections. Diagnostics only.
    fn collection_names(&self) -> StoreResult<Vec<String>>;
}

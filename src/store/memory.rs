//! In-memory document store.
//!
//! Backs the server by default and doubles as the store used by tests.
//! A driver-backed engine slots in behind the same [`DocumentStore`]
//! trait without touching anything above the gateway.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::filter::Filter;
use super::id::DocumentId;
use super::{Document, DocumentStore};

/// `RwLock`-guarded map of collection name to documents in insertion
/// order.
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents in a collection. Test support.
    pub fn count(&self, collection: &str) -> StoreResult<usize> {
        let data = self.read()?;
        Ok(data.get(collection).map_or(0, Vec::len))
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(
        &self,
    ) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<Document>>>> {
        self.collections
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, record: Document) -> StoreResult<DocumentId> {
        let id = DocumentId::mint();

        let mut stored = record;
        stored.insert("_id".to_string(), Value::String(id.encode()));
        stored.insert(
            "created_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );

        let mut data = self.write()?;
        data.entry(collection.to_string()).or_default().push(stored);

        Ok(id)
    }

    fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let data = self.read()?;
        Ok(data
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    fn find_many(&self, collection: &str, filter: &Filter) -> StoreResult<Vec<Document>> {
        let data = self.read()?;
        Ok(data
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: Document,
    ) -> StoreResult<u64> {
        let by_id = Filter::by_id(id);

        let mut data = self.write()?;
        let Some(docs) = data.get_mut(collection) else {
            return Ok(0);
        };
        let Some(doc) = docs.iter_mut().find(|doc| by_id.matches(doc)) else {
            return Ok(0);
        };

        for (key, value) in patch {
            doc.insert(key, value);
        }
        Ok(1)
    }

    fn collection_names(&self) -> StoreResult<Vec<String>> {
        let data = self.read()?;
        let mut names: Vec<String> = data
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        Ok(names)
    }
}

//! # Response Formatting
//!
//! Wire shapes shared by the API surface, and the serialization rule
//! for stored documents: the internal `_id` field is always renamed to
//! `id` on the way out. Timestamps are stored as RFC 3339 strings, so
//! they serialize as-is.

use serde::Serialize;
use serde_json::Value;

use crate::store::Document;

/// Body returned by every successful POST.
#[derive(Debug, Clone, Serialize)]
pub struct Created {
    pub id: String,
}

impl Created {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Convert a stored document into its client-facing form.
pub fn serialize_document(mut doc: Document) -> Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id".to_string(), id);
    }
    Value::Object(doc)
}

/// Serialize a batch of documents for a list endpoint.
pub fn serialize_documents(docs: Vec<Document>) -> Vec<Value> {
    docs.into_iter().map(serialize_document).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_renamed() {
        let doc = json!({"_id": "abc", "name": "Ada"})
            .as_object()
            .cloned()
            .unwrap();
        let out = serialize_document(doc);
        assert_eq!(out["id"], "abc");
        assert!(out.get("_id").is_none());
        assert_eq!(out["name"], "Ada");
    }

    #[test]
    fn test_document_without_internal_id() {
        let doc = json!({"name": "Ada"}).as_object().cloned().unwrap();
        let out = serialize_document(doc);
        assert!(out.get("id").is_none());
    }

    #[test]
    fn test_created_body() {
        let body = serde_json::to_value(Created::new("abc")).unwrap();
        assert_eq!(body, json!({"id": "abc"}));
    }
}

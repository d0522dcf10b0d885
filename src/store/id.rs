//! Document identifier codec.
//!
//! The store mints opaque identifiers; clients only ever see the encoded
//! string form. Every id string arriving at the API boundary is decoded
//! here before any lookup, so a malformed reference fails before it can
//! reach the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A string that is not a well-formed document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0:?}")]
pub struct InvalidIdentifier(pub String);

/// Store-minted identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Mint a fresh identifier.
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// External string form (canonical hyphenated, 36 chars).
    pub fn encode(&self) -> String {
        self.0.to_string()
    }

    /// Parse the external string form.
    ///
    /// Only the canonical hyphenated form is accepted; anything with the
    /// wrong length or charset fails with [`InvalidIdentifier`].
    pub fn decode(raw: &str) -> Result<Self, InvalidIdentifier> {
        // Uuid::parse_str also accepts simple/braced/urn forms; reject
        // those up front so there is exactly one valid encoding.
        if raw.len() != 36 {
            return Err(InvalidIdentifier(raw.to_string()));
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| InvalidIdentifier(raw.to_string()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

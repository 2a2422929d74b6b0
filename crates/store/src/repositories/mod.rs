//! Repository layer for the meerkat store.
//!
//! Stateless async functions, one per use case. Each takes a `&Database`
//! handle, runs exactly one query against a fixed collection, and returns
//! a typed result. Read operations decode into a locally scoped buffer,
//! so concurrent callers never share result state.

pub mod crawl_targets;
pub mod live;
pub mod users;

use crate::errors::StoreError;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use tracing::warn;

/// Parse a 24-character hex string into an `ObjectId`.
///
/// Malformed input behaves like an id that matches nothing: the caller
/// gets `None` and a warning is logged, never an error. This keeps
/// lookups on garbage ids indistinguishable from lookups on absent ids.
pub(crate) fn parse_object_id(id: &str) -> Option<ObjectId> {
    match ObjectId::parse_str(id) {
        Ok(oid) => Some(oid),
        Err(e) => {
            warn!(id, "Malformed document id: {}", e);
            None
        }
    }
}

/// Serialize a result set to the JSON array string callers receive.
pub(crate) fn documents_to_json(docs: &[Document]) -> Result<String, StoreError> {
    serde_json::to_string(docs)
        .map_err(|e| StoreError::Serialize(format!("Failed to encode result set: {}", e)))
}

//! Live-status listings from the `live_list` collection.
//!
//! Read-only: the crawler owns the records, this layer only lists them.

use super::documents_to_json;
use crate::client::COLLECTION_LIVE;
use crate::errors::StoreError;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;

/// List currently-live channels, highest attendance first.
///
/// Returns a JSON array string of the raw records, sorted by `liveAttdc`
/// descending. Records are decoded as open documents because the crawler
/// writes per-platform fields this layer does not model.
pub async fn list_live(db: &Database) -> Result<String, StoreError> {
    let docs: Vec<Document> = db
        .collection::<Document>(COLLECTION_LIVE)
        .find(doc! { "onLive": true })
        .sort(doc! { "liveAttdc": -1 })
        .await
        .map_err(|e| StoreError::Database(format!("Failed to query live list: {}", e)))?
        .try_collect()
        .await
        .map_err(|e| StoreError::Database(format!("Failed to read live list: {}", e)))?;

    documents_to_json(&docs)
}

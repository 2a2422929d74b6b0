//! Crawl-target CRUD against the `crawl_target` collection.
//!
//! Mutating operations report completion with fixed status strings
//! (`"Delete!"`, `"Update!"`, `"create!"`) regardless of whether a
//! document matched; only infrastructure failures surface as errors.

use super::{documents_to_json, parse_object_id};
use crate::client::COLLECTION_CRAWL;
use crate::errors::StoreError;
use crate::models::CrawlTarget;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;
use tracing::debug;

/// List every crawl target as a JSON array string.
pub async fn list_all(db: &Database) -> Result<String, StoreError> {
    let docs: Vec<Document> = db
        .collection::<Document>(COLLECTION_CRAWL)
        .find(doc! {})
        .await
        .map_err(|e| StoreError::Database(format!("Failed to query crawl targets: {}", e)))?
        .try_collect()
        .await
        .map_err(|e| StoreError::Database(format!("Failed to read crawl targets: {}", e)))?;

    documents_to_json(&docs)
}

/// Find a crawl target by its hex id.
///
/// Returns a JSON array string with zero or one element. A malformed or
/// unknown id yields `"[]"`, not an error.
pub async fn find_by_id(db: &Database, id: &str) -> Result<String, StoreError> {
    let Some(oid) = parse_object_id(id) else {
        return documents_to_json(&[]);
    };

    let docs: Vec<Document> = db
        .collection::<Document>(COLLECTION_CRAWL)
        .find(doc! { "_id": oid })
        .await
        .map_err(|e| StoreError::Database(format!("Failed to query crawl target {}: {}", id, e)))?
        .try_collect()
        .await
        .map_err(|e| StoreError::Database(format!("Failed to read crawl target {}: {}", id, e)))?;

    documents_to_json(&docs)
}

/// Delete the crawl target with the given hex id.
///
/// Idempotent: returns `"Delete!"` whether or not a document was removed.
pub async fn delete_by_id(db: &Database, id: &str) -> Result<&'static str, StoreError> {
    if let Some(oid) = parse_object_id(id) {
        let result = db
            .collection::<Document>(COLLECTION_CRAWL)
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| {
                StoreError::Database(format!("Failed to delete crawl target {}: {}", id, e))
            })?;
        debug!(id, deleted = result.deleted_count, "Deleted crawl target");
    }

    Ok("Delete!")
}

/// Set platform/channel/channelID on the crawl target with the given hex
/// id. Returns `"Update!"` regardless of match; no document is created
/// when the id is unknown.
pub async fn update_by_id(
    db: &Database,
    id: &str,
    platform: &str,
    channel: &str,
    channel_id: &str,
) -> Result<&'static str, StoreError> {
    if let Some(oid) = parse_object_id(id) {
        let update = doc! {
            "$set": {
                "platform": platform,
                "channel": channel,
                "channelID": channel_id,
            }
        };
        let result = db
            .collection::<Document>(COLLECTION_CRAWL)
            .update_one(doc! { "_id": oid }, update)
            .await
            .map_err(|e| {
                StoreError::Database(format!("Failed to update crawl target {}: {}", id, e))
            })?;
        debug!(id, matched = result.matched_count, "Updated crawl target");
    }

    Ok("Update!")
}

/// Insert a new crawl target; the store assigns its id.
pub async fn create(
    db: &Database,
    platform: &str,
    channel: &str,
    channel_id: &str,
) -> Result<&'static str, StoreError> {
    let target = CrawlTarget::new(platform, channel, channel_id);
    db.collection::<CrawlTarget>(COLLECTION_CRAWL)
        .insert_one(&target)
        .await
        .map_err(|e| StoreError::Database(format!("Failed to create crawl target: {}", e)))?;

    Ok("create!")
}

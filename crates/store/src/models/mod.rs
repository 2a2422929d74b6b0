//! Data models mapping to the store's collections.
//!
//! Serde renames match the stored field names exactly (`channelID`,
//! `googleId`, `onLive`, `liveAttdc`), so inserts are byte-compatible with
//! documents written by earlier versions of the crawler.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Crawl target (maps to the `crawl_target` collection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlTarget {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub platform: String,
    pub channel: String,
    #[serde(rename = "channelID")]
    pub channel_id: String,
}

impl CrawlTarget {
    /// A target not yet persisted; the store assigns the id on insert.
    pub fn new(platform: &str, channel: &str, channel_id: &str) -> Self {
        Self {
            id: None,
            platform: platform.to_string(),
            channel: channel.to_string(),
            channel_id: channel_id.to_string(),
        }
    }
}

/// Live-status record (maps to the `live_list` collection).
///
/// The crawler writes additional per-platform fields beyond the two known
/// ones; `extra` preserves them so a decoded record round-trips untouched.
/// This layer never writes live records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveRecord {
    #[serde(rename = "onLive")]
    pub on_live: bool,
    #[serde(rename = "liveAttdc")]
    pub live_attdc: i64,
    #[serde(flatten)]
    pub extra: Document,
}

/// User account (maps to the `user_info` collection).
///
/// `token` is absent until the first post-OAuth token update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "googleId")]
    pub google_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserAccount {
    /// An account as created on first sight: no id, no token.
    pub fn new(google_id: &str, name: &str, email: &str) -> Self {
        Self {
            id: None,
            google_id: google_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            token: None,
        }
    }
}

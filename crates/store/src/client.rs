//! MongoDB connection management.
//!
//! One verified client is established at startup and shared; the driver
//! pools connections internally, so repository calls never pay a
//! per-operation connection setup.

use crate::config::StoreConfig;
use crate::errors::StoreError;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::info;

/// Database name.
pub const DB_NAME: &str = "meerkatonair";

/// Collection names.
pub const COLLECTION_LIVE: &str = "live_list";
pub const COLLECTION_CRAWL: &str = "crawl_target";
pub const COLLECTION_USER: &str = "user_info";

/// Deadline for connection establishment and server selection. Queries
/// themselves are not bounded by this.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Connect to the `meerkatonair` database using the local auth file.
pub async fn connect() -> Result<Database, StoreError> {
    let config = StoreConfig::load()?;
    connect_with_config(&config).await
}

/// Connect to the `meerkatonair` database with explicit credentials.
pub async fn connect_with_config(config: &StoreConfig) -> Result<Database, StoreError> {
    let credential = Credential::builder()
        .username(config.username.clone())
        .password(config.password.clone())
        .build();
    let client = connect_client(&config.connection_uri(), Some(credential)).await?;
    Ok(client.database(DB_NAME))
}

/// Build a verified client for the given URI.
///
/// Reachability is checked with a `ping` before the client is handed out,
/// so a bad address or bad credentials fail here rather than on the first
/// repository call.
pub async fn connect_client(
    uri: &str,
    credential: Option<Credential>,
) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| StoreError::Connection(format!("Invalid connection URI: {}", e)))?;
    options.connect_timeout = Some(CONNECT_TIMEOUT);
    options.server_selection_timeout = Some(CONNECT_TIMEOUT);
    if credential.is_some() {
        options.credential = credential;
    }

    let client = Client::with_options(options)
        .map_err(|e| StoreError::Connection(format!("Failed to build MongoDB client: {}", e)))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| StoreError::Connection(format!("Failed to ping MongoDB: {}", e)))?;

    info!("Connected to MongoDB");
    Ok(client)
}

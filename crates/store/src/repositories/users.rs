//! User accounts in the `user_info` collection.

use crate::client::COLLECTION_USER;
use crate::errors::StoreError;
use crate::models::UserAccount;
use mongodb::bson::doc;
use mongodb::Database;
use tracing::info;

/// Ensure a user exists, creating one on first sight.
///
/// Existence is keyed on the (googleId, name) pair. Calling this twice
/// with the same identity stores exactly one record. Always returns
/// `true` on success.
pub async fn check_or_create(
    db: &Database,
    google_id: &str,
    name: &str,
    email: &str,
) -> Result<bool, StoreError> {
    let users = db.collection::<UserAccount>(COLLECTION_USER);

    let count = users
        .count_documents(doc! { "googleId": google_id, "name": name })
        .await
        .map_err(|e| StoreError::Database(format!("Failed to count users: {}", e)))?;

    if count == 0 {
        users
            .insert_one(UserAccount::new(google_id, name, email))
            .await
            .map_err(|e| StoreError::Database(format!("Failed to create user: {}", e)))?;
        info!(name, "Created user account");
    }

    Ok(true)
}

/// Set the OAuth token on the user matching `googleId`.
pub async fn update_token(db: &Database, google_id: &str, token: &str) -> Result<(), StoreError> {
    db.collection::<UserAccount>(COLLECTION_USER)
        .update_one(
            doc! { "googleId": google_id },
            doc! { "$set": { "token": token } },
        )
        .await
        .map_err(|e| StoreError::Database(format!("Failed to update user token: {}", e)))?;

    Ok(())
}

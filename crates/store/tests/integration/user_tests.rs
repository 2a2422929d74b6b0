//! User account tests.

use crate::common::TestDb;
use meerkat_store::client::COLLECTION_USER;
use meerkat_store::repositories::users;
use mongodb::bson::{doc, Document};

#[tokio::test]
async fn test_check_or_create_stores_exactly_one_record() -> anyhow::Result<()> {
    let test_db = TestDb::connect().await?;

    let first = users::check_or_create(&test_db.db, "g-1", "alice", "alice@example.com").await?;
    let second = users::check_or_create(&test_db.db, "g-1", "alice", "alice@example.com").await?;
    assert!(first);
    assert!(second);

    let collection = test_db.db.collection::<Document>(COLLECTION_USER);
    assert_eq!(collection.count_documents(doc! {}).await?, 1);

    let stored = collection
        .find_one(doc! { "googleId": "g-1" })
        .await?
        .expect("User should exist");
    assert_eq!(stored.get_str("name")?, "alice");
    assert_eq!(stored.get_str("email")?, "alice@example.com");
    // Token is absent until the first token update
    assert!(!stored.contains_key("token"));

    test_db.teardown().await
}

#[tokio::test]
async fn test_check_or_create_keys_on_google_id_and_name() -> anyhow::Result<()> {
    let test_db = TestDb::connect().await?;

    // Same googleId under a different display name counts as a new
    // identity (existence is keyed on the pair).
    users::check_or_create(&test_db.db, "g-1", "alice", "a@example.com").await?;
    users::check_or_create(&test_db.db, "g-1", "renamed", "a@example.com").await?;

    let collection = test_db.db.collection::<Document>(COLLECTION_USER);
    assert_eq!(collection.count_documents(doc! {}).await?, 2);

    test_db.teardown().await
}

#[tokio::test]
async fn test_update_token_sets_token() -> anyhow::Result<()> {
    let test_db = TestDb::connect().await?;
    users::check_or_create(&test_db.db, "g-2", "bob", "bob@example.com").await?;

    users::update_token(&test_db.db, "g-2", "oauth-token-123").await?;

    let stored = test_db
        .db
        .collection::<Document>(COLLECTION_USER)
        .find_one(doc! { "googleId": "g-2" })
        .await?
        .expect("User should exist");
    assert_eq!(stored.get_str("token")?, "oauth-token-123");

    test_db.teardown().await
}

//! Live-listing tests.

use crate::common::{parse_array, TestDb};
use meerkat_store::client::COLLECTION_LIVE;
use meerkat_store::repositories::live;
use mongodb::bson::{doc, Document};

#[tokio::test]
async fn test_list_live_filters_and_sorts() -> anyhow::Result<()> {
    let test_db = TestDb::connect().await?;

    // Seed records the way the crawler writes them, including fields this
    // layer does not model.
    test_db
        .db
        .collection::<Document>(COLLECTION_LIVE)
        .insert_many(vec![
            doc! { "onLive": true, "liveAttdc": 10_i64, "channel": "small" },
            doc! { "onLive": false, "liveAttdc": 900_i64, "channel": "offline" },
            doc! { "onLive": true, "liveAttdc": 500_i64, "channel": "big", "title": "raid" },
        ])
        .await?;

    let listing = parse_array(&live::list_live(&test_db.db).await?);

    // Only onLive records, highest attendance first
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["channel"], "big");
    assert_eq!(listing[0]["liveAttdc"], 500);
    assert_eq!(listing[1]["channel"], "small");
    assert!(listing.iter().all(|rec| rec["onLive"] == true));

    // Unmodeled fields survive serialization
    assert_eq!(listing[0]["title"], "raid");

    test_db.teardown().await
}

#[tokio::test]
async fn test_list_live_empty_collection() -> anyhow::Result<()> {
    let test_db = TestDb::connect().await?;

    assert_eq!(live::list_live(&test_db.db).await?, "[]");

    test_db.teardown().await
}

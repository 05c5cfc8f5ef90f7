//! Handler Property Tests
//!
//! Exercises the handlers directly against an [`ItemStore`], without
//! the HTTP layer:
//! - Write then read returns the same record
//! - Delete is idempotent
//! - Update never creates
//! - Rejected requests leave the table unchanged
//! - Table failures surface as 500 envelopes

use async_trait::async_trait;
use coffee_api::handlers::{dispatch, ApiRequest, Envelope, Route};
use coffee_api::model::{Item, ItemPatch};
use coffee_api::table::{ItemStore, MemoryStore, StorageError, StorageResult};
use serde_json::{json, Value};

// =============================================================================
// Test Utilities
// =============================================================================

fn coffee(id: &str, name: &str, price: i64) -> String {
    json!({"id": id, "name": name, "price": price, "available": true}).to_string()
}

async fn create(store: &dyn ItemStore, body: &str) -> Envelope {
    dispatch(Route::Create, store, &ApiRequest::new("POST", "/coffee").with_body(body)).await
}

async fn read(store: &dyn ItemStore, id: &str) -> Envelope {
    let path = format!("/coffee/{id}");
    dispatch(Route::Read, store, &ApiRequest::new("GET", &path).with_id(id)).await
}

async fn scan(store: &dyn ItemStore) -> Vec<Value> {
    let envelope = dispatch(Route::Read, store, &ApiRequest::new("GET", "/coffee")).await;
    assert_eq!(envelope.status_code, 200);
    envelope.json_body().unwrap().as_array().unwrap().clone()
}

async fn update(store: &dyn ItemStore, id: &str, body: &str) -> Envelope {
    let path = format!("/coffee/{id}");
    let request = ApiRequest::new("PUT", &path).with_id(id).with_body(body);
    dispatch(Route::Update, store, &request).await
}

async fn delete(store: &dyn ItemStore, id: &str) -> Envelope {
    let path = format!("/coffee/{id}");
    dispatch(Route::Delete, store, &ApiRequest::new("DELETE", &path).with_id(id)).await
}

/// Table whose every call fails the way a throttled backend would
struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn get(&self, _id: &str) -> StorageResult<Option<Item>> {
        Err(StorageError::backend("ThrottlingException: Rate exceeded"))
    }

    async fn scan(&self) -> StorageResult<Vec<Item>> {
        Err(StorageError::backend("ThrottlingException: Rate exceeded"))
    }

    async fn put(&self, _item: Item) -> StorageResult<Item> {
        Err(StorageError::backend("ThrottlingException: Rate exceeded"))
    }

    async fn update(&self, _id: &str, _patch: &ItemPatch) -> StorageResult<Item> {
        Err(StorageError::backend("ThrottlingException: Rate exceeded"))
    }

    async fn delete(&self, _id: &str) -> StorageResult<()> {
        Err(StorageError::backend("ThrottlingException: Rate exceeded"))
    }

    fn backend(&self) -> &'static str {
        "failing"
    }
}

// =============================================================================
// Envelope Shape
// =============================================================================

/// Every envelope carries the JSON content type and a parseable body.
#[tokio::test]
async fn test_every_envelope_is_json() {
    let store = MemoryStore::new();

    let envelopes = vec![
        create(&store, &coffee("c1", "latte", 300)).await,
        create(&store, "not json").await,
        read(&store, "c1").await,
        read(&store, "missing").await,
        update(&store, "c1", r#"{"available":false}"#).await,
        delete(&store, "c1").await,
        read(&FailingStore, "c1").await,
    ];

    for envelope in envelopes {
        assert_eq!(envelope.headers["Content-Type"], "application/json");
        assert!(envelope.json_body().is_ok(), "body not JSON: {}", envelope.body);
    }
}

// =============================================================================
// Table Properties
// =============================================================================

/// A created record reads back unchanged.
#[tokio::test]
async fn test_create_read_round_trip() {
    let store = MemoryStore::new();
    let body = json!({"id": "m1", "name": "mocha", "price": 12.5, "available": false}).to_string();

    assert_eq!(create(&store, &body).await.status_code, 201);

    let envelope = read(&store, "m1").await;
    assert_eq!(envelope.status_code, 200);
    assert_eq!(envelope.json_body().unwrap(), serde_json::from_str::<Value>(&body).unwrap());
}

/// Creating an existing id replaces the record.
#[tokio::test]
async fn test_create_overwrites() {
    let store = MemoryStore::new();

    create(&store, &coffee("c1", "latte", 300)).await;
    create(&store, &coffee("c1", "flat white", 350)).await;

    let item = read(&store, "c1").await.json_body().unwrap();
    assert_eq!(item["name"], "flat white");
    assert_eq!(item["price"], 350);
    assert_eq!(scan(&store).await.len(), 1);
}

/// Deleting twice succeeds both times.
#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = MemoryStore::new();
    create(&store, &coffee("c1", "latte", 300)).await;

    assert_eq!(delete(&store, "c1").await.status_code, 200);
    assert_eq!(delete(&store, "c1").await.status_code, 200);
    assert_eq!(read(&store, "c1").await.status_code, 404);
}

/// After N creates and M deletes the scan has N - M records.
#[tokio::test]
async fn test_scan_counts_live_records() {
    let store = MemoryStore::new();

    for i in 0..5 {
        create(&store, &coffee(&format!("c{i}"), "drip", 100 + i)).await;
    }
    delete(&store, "c1").await;
    delete(&store, "c3").await;

    let items = scan(&store).await;
    assert_eq!(items.len(), 3);

    let mut ids: Vec<&str> = items.iter().map(|i| i["id"].as_str().unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec!["c0", "c2", "c4"]);
}

/// Update keeps unmentioned fields and never creates.
#[tokio::test]
async fn test_update_is_partial_and_never_upserts() {
    let store = MemoryStore::new();
    create(&store, &coffee("c1", "latte", 300)).await;

    let envelope = update(&store, "c1", r#"{"name":"oat latte"}"#).await;
    assert_eq!(envelope.status_code, 200);
    assert_eq!(
        envelope.json_body().unwrap(),
        json!({"id": "c1", "name": "oat latte", "price": 300, "available": true})
    );

    assert_eq!(update(&store, "c9", r#"{"name":"ghost"}"#).await.status_code, 404);
    assert_eq!(read(&store, "c9").await.status_code, 404);
}

// =============================================================================
// Rejected Requests
// =============================================================================

/// Validation failures are 400 and leave the table untouched.
#[tokio::test]
async fn test_rejected_requests_do_not_mutate() {
    let store = MemoryStore::new();
    create(&store, &coffee("c1", "latte", 300)).await;

    let rejected = vec![
        create(&store, "{\"id\":").await,
        create(&store, r#"{"id":"","name":"blank","price":1,"available":true}"#).await,
        create(&store, r#"{"id":"c2","name":"x","price":1,"available":true,"size":"xl"}"#).await,
        update(&store, "c1", "{}").await,
        update(&store, "c1", r#"{"id":"c2","price":1}"#).await,
        update(&store, "c1", r#"{"price":"cheap"}"#).await,
    ];

    for envelope in rejected {
        assert_eq!(envelope.status_code, 400, "body: {}", envelope.body);
        assert!(envelope.json_body().unwrap()["message"].is_string());
    }

    let latte = json!({"id": "c1", "name": "latte", "price": 300, "available": true});
    assert_eq!(scan(&store).await, vec![latte]);
}

/// Routes that need an id reject a request without one.
#[tokio::test]
async fn test_missing_path_id_is_400() {
    let store = MemoryStore::new();

    let envelope = dispatch(Route::Delete, &store, &ApiRequest::new("DELETE", "/coffee")).await;
    assert_eq!(envelope.status_code, 400);

    let envelope = dispatch(
        Route::Update,
        &store,
        &ApiRequest::new("PUT", "/coffee").with_body(r#"{"price":1}"#),
    )
    .await;
    assert_eq!(envelope.status_code, 400);
}

// =============================================================================
// Table Failures
// =============================================================================

/// Every handler turns a table failure into a 500 with the cause.
#[tokio::test]
async fn test_table_failures_are_500() {
    let store = FailingStore;

    let envelopes = vec![
        create(&store, &coffee("c1", "latte", 300)).await,
        read(&store, "c1").await,
        dispatch(Route::Read, &store, &ApiRequest::new("GET", "/coffee")).await,
        update(&store, "c1", r#"{"price":1}"#).await,
        delete(&store, "c1").await,
    ];

    for envelope in envelopes {
        assert_eq!(envelope.status_code, 500);
        assert!(envelope.is_server_error());
        assert_eq!(
            envelope.json_body().unwrap()["message"],
            "ThrottlingException: Rate exceeded"
        );
    }
}

/// Validation runs before the table, so a bad body is 400 even when the
/// table is down.
#[tokio::test]
async fn test_validation_precedes_table() {
    let envelope = create(&FailingStore, "nope").await;
    assert_eq!(envelope.status_code, 400);
}

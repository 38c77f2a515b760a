//! Tests for the store module

use super::*;
use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn seed(store: &Arc<InMemory>, key: &str, body: &str) {
    store
        .put(&ObjectPath::from(key), Bytes::from(body.to_string()).into())
        .await
        .unwrap();
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_returns_all_objects_under_prefix() {
    let store = Arc::new(InMemory::new());
    seed(&store, "in/a.csv", "id\n1").await;
    seed(&store, "in/b.csv", "id\n2").await;
    seed(&store, "in/nested/c.csv", "id\n3").await;
    seed(&store, "other/d.csv", "id\n4").await;

    let location = StorageLocation::with_store(store, "bucket", "in/");
    let mut keys: Vec<String> = location
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.key)
        .collect();
    keys.sort();

    assert_eq!(keys, vec!["in/a.csv", "in/b.csv", "in/nested/c.csv"]);
}

#[tokio::test]
async fn test_list_empty_prefix_returns_whole_container() {
    let store = Arc::new(InMemory::new());
    seed(&store, "a.csv", "id\n1").await;
    seed(&store, "deep/b.csv", "id\n2").await;

    let location = StorageLocation::with_store(store, "bucket", "");
    let entries = location.list().await.unwrap();

    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn test_list_reports_sizes() {
    let store = Arc::new(InMemory::new());
    seed(&store, "in/a.csv", "id\n1").await;

    let location = StorageLocation::with_store(store, "bucket", "in");
    let entries = location.list().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].size, "id\n1".len());
}

// ============================================================================
// Read / Write Tests
// ============================================================================

#[tokio::test]
async fn test_read_returns_object_bytes() {
    let store = Arc::new(InMemory::new());
    seed(&store, "in/a.csv", "id,name\n1,a").await;

    let location = StorageLocation::with_store(store, "bucket", "in/");
    let bytes = location.read("in/a.csv").await.unwrap();

    assert_eq!(&bytes[..], b"id,name\n1,a");
}

#[tokio::test]
async fn test_read_missing_object_is_recoverable_error() {
    let store = Arc::new(InMemory::new());
    let location = StorageLocation::with_store(store, "bucket", "in/");

    let err = location.read("in/missing.csv").await.unwrap_err();
    assert!(matches!(err, crate::error::Error::Read { .. }));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_write_then_read_round_trip() {
    let store = Arc::new(InMemory::new());
    let location = StorageLocation::with_store(store, "bucket", "out/");

    location
        .write("out/a.parquet", Bytes::from_static(b"PAR1"))
        .await
        .unwrap();

    let bytes = location.read("out/a.parquet").await.unwrap();
    assert_eq!(&bytes[..], b"PAR1");
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_parse_local_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let location = StorageLocation::parse(temp_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(location.prefix(), "");
}

#[test]
fn test_prefix_is_normalized() {
    let store = Arc::new(InMemory::new());
    let location = StorageLocation::with_store(store, "bucket", "inbound");
    assert_eq!(location.prefix(), "inbound/");
    assert_eq!(location.container(), "bucket");
}

use anyhow::Result;
use serde_json::json;

use orderbot::storage::{DocumentStore, FileStore, MemoryStore, StorageError, ADDRESSES, PRODUCTS};

#[test]
fn memory_store_round_trip() -> Result<()> {
    let store = MemoryStore::new();

    assert!(store.read(ADDRESSES)?.is_none());

    let value = json!(["Riverside", "Hilltop"]);
    store.write(ADDRESSES, &value)?;
    assert_eq!(store.read(ADDRESSES)?, Some(value));

    Ok(())
}

#[test]
fn file_store_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;

    assert!(store.read(PRODUCTS)?.is_none());

    let value = json!("Apples, Bread");
    store.write(PRODUCTS, &value)?;
    assert_eq!(store.read(PRODUCTS)?, Some(value));

    Ok(())
}

#[test]
fn file_store_overwrites_wholesale() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;

    store.write(ADDRESSES, &json!(["Riverside", "Hilltop"]))?;
    store.write(ADDRESSES, &json!(["Meadow"]))?;

    assert_eq!(store.read(ADDRESSES)?, Some(json!(["Meadow"])));
    Ok(())
}

#[test]
fn file_store_survives_reopen() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let value = json!(["Riverside"]);

    {
        let store = FileStore::open(dir.path())?;
        store.write(ADDRESSES, &value)?;
    }

    // A fresh handle over the same directory simulates a process restart.
    let store = FileStore::open(dir.path())?;
    assert_eq!(store.read(ADDRESSES)?, Some(value));

    Ok(())
}

#[test]
fn collections_are_independent() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;

    store.write(ADDRESSES, &json!(["Riverside"]))?;
    assert!(store.read(PRODUCTS)?.is_none());

    Ok(())
}

#[test]
fn malformed_collection_is_reported() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("addresses.json"), b"{ not json")?;

    let store = FileStore::open(dir.path())?;
    match store.read(ADDRESSES) {
        Err(StorageError::Malformed { collection, .. }) => assert_eq!(collection, "addresses"),
        other => panic!("expected a malformed-JSON error, got {other:?}"),
    }

    Ok(())
}

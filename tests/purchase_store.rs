use std::sync::Arc;

use adfree::iap::{FlagStorage, PurchaseStatus, PurchaseStore, TomlFlagStorage, REMOVE_ADS_KEY};

#[test]
fn purchase_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let store = PurchaseStore::open(Arc::new(TomlFlagStorage::new(&path)));
    assert_eq!(store.current(), PurchaseStatus::Unknown);
    store.transition(PurchaseStatus::Purchased);
    drop(store);

    let reopened = PurchaseStore::open(Arc::new(TomlFlagStorage::new(&path)));
    assert_eq!(reopened.current(), PurchaseStatus::Purchased);
}

#[test]
fn reset_reopens_as_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let store = PurchaseStore::open(Arc::new(TomlFlagStorage::new(&path)));
    store.transition(PurchaseStatus::Purchased);
    store.transition(PurchaseStatus::NotPurchased);

    let storage = TomlFlagStorage::new(&path);
    assert_eq!(storage.load(REMOVE_ADS_KEY).unwrap(), Some(false));

    let reopened = PurchaseStore::open(Arc::new(storage));
    assert_eq!(reopened.current(), PurchaseStatus::Unknown);
}

#[test]
fn purchase_over_corrupt_state_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "this is [not toml").unwrap();

    let store = PurchaseStore::open(Arc::new(TomlFlagStorage::new(&path)));
    assert_eq!(store.current(), PurchaseStatus::Unknown);

    store.transition(PurchaseStatus::Purchased);
    assert_eq!(store.current(), PurchaseStatus::Purchased);
    drop(store);

    let reopened = PurchaseStore::open(Arc::new(TomlFlagStorage::new(&path)));
    assert_eq!(reopened.current(), PurchaseStatus::Purchased);
}

#[test]
fn clones_share_status() {
    let dir = tempfile::tempdir().unwrap();
    let store = PurchaseStore::open(Arc::new(TomlFlagStorage::new(
        dir.path().join("state.toml"),
    )));
    let other = store.clone();

    other.transition(PurchaseStatus::Purchased);
    assert_eq!(store.current(), PurchaseStatus::Purchased);
}

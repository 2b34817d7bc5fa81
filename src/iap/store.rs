//! Shared purchase status with write-through persistence.
//!
//! One `PurchaseStore` is created at startup and cloned into every screen
//! that needs it. Only `transition` mutates the status.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use super::status::PurchaseStatus;
use super::storage::FlagStorage;

/// Persistence key for the "remove ads purchased" flag.
pub const REMOVE_ADS_KEY: &str = "remove_ads_purchased";

/// Cloneable handle to the process-wide purchase status.
///
/// The status lock is held across the persistence write, so concurrent
/// transitions are serialized and the stored flag always matches the
/// last status set.
#[derive(Clone)]
pub struct PurchaseStore {
    status: Arc<Mutex<PurchaseStatus>>,
    storage: Arc<dyn FlagStorage>,
    banner_hidden: Arc<watch::Sender<bool>>,
}

impl PurchaseStore {
    /// Open the store, seeding the status from the persisted flag.
    ///
    /// A read failure is logged and treated as "never checked".
    pub fn open(storage: Arc<dyn FlagStorage>) -> Self {
        let flag = match storage.load(REMOVE_ADS_KEY) {
            Ok(flag) => flag,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read purchase flag, assuming unknown");
                None
            }
        };
        let status = PurchaseStatus::from_persisted(flag);
        tracing::debug!(?status, "purchase store opened");

        let (banner_hidden, _) = watch::channel(status.is_purchased());
        Self {
            status: Arc::new(Mutex::new(status)),
            storage,
            banner_hidden: Arc::new(banner_hidden),
        }
    }

    pub fn current(&self) -> PurchaseStatus {
        *self.status.lock()
    }

    /// Set the status and write the purchased flag through to storage.
    ///
    /// Subscribers of `subscribe_banner_hidden` are notified only when the
    /// purchased projection changes, so repeating a transition is silent.
    ///
    /// The write is synchronous and blocks the calling thread, including a
    /// runtime worker when called from a task. The flag has been persisted
    /// by the time this returns.
    pub fn transition(&self, to: PurchaseStatus) {
        let mut status = self.status.lock();
        let from = *status;
        *status = to;

        if let Err(e) = self.storage.save(REMOVE_ADS_KEY, to.is_purchased()) {
            tracing::warn!(error = %e, ?to, "failed to persist purchase flag");
        }

        if from.is_purchased() != to.is_purchased() {
            tracing::info!(?from, ?to, "banner visibility changed");
            self.banner_hidden.send_replace(to.is_purchased());
        } else {
            tracing::debug!(?from, ?to, "purchase status transition");
        }
    }

    /// Receiver yielding `true` while ads should be hidden.
    pub fn subscribe_banner_hidden(&self) -> watch::Receiver<bool> {
        self.banner_hidden.subscribe()
    }
}

impl std::fmt::Debug for PurchaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseStore")
            .field("status", &self.current())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iap::storage::{MemoryFlagStorage, StorageError};

    struct FailingStorage;

    impl FlagStorage for FailingStorage {
        fn load(&self, _key: &str) -> Result<Option<bool>, StorageError> {
            Err(StorageError::Read {
                path: "/nonexistent".into(),
                source: std::io::Error::other("boom"),
            })
        }

        fn save(&self, _key: &str, _value: bool) -> Result<(), StorageError> {
            Err(StorageError::Write {
                path: "/nonexistent".into(),
                source: std::io::Error::other("boom"),
            })
        }
    }

    #[test]
    fn fresh_install_is_unknown() {
        let store = PurchaseStore::open(Arc::new(MemoryFlagStorage::new()));
        assert_eq!(store.current(), PurchaseStatus::Unknown);
    }

    #[test]
    fn persisted_true_opens_as_purchased() {
        let storage = MemoryFlagStorage::with_flag(REMOVE_ADS_KEY, true);
        let store = PurchaseStore::open(Arc::new(storage));
        assert_eq!(store.current(), PurchaseStatus::Purchased);
    }

    #[test]
    fn persisted_false_opens_as_unknown() {
        let storage = MemoryFlagStorage::with_flag(REMOVE_ADS_KEY, false);
        let store = PurchaseStore::open(Arc::new(storage));
        assert_eq!(store.current(), PurchaseStatus::Unknown);
    }

    #[test]
    fn transition_writes_through() {
        let storage = MemoryFlagStorage::new();
        let store = PurchaseStore::open(Arc::new(storage.clone()));

        store.transition(PurchaseStatus::NotPurchased);
        assert_eq!(storage.get(REMOVE_ADS_KEY), Some(false));

        store.transition(PurchaseStatus::Purchased);
        assert_eq!(storage.get(REMOVE_ADS_KEY), Some(true));
    }

    #[test]
    fn repeated_transition_notifies_once() {
        let store = PurchaseStore::open(Arc::new(MemoryFlagStorage::new()));
        let mut rx = store.subscribe_banner_hidden();
        assert!(!*rx.borrow_and_update());

        store.transition(PurchaseStatus::Purchased);
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());

        store.transition(PurchaseStatus::Purchased);
        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.current(), PurchaseStatus::Purchased);
    }

    #[test]
    fn unknown_to_not_purchased_is_silent() {
        let store = PurchaseStore::open(Arc::new(MemoryFlagStorage::new()));
        let rx = store.subscribe_banner_hidden();
        store.transition(PurchaseStatus::NotPurchased);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn storage_failures_do_not_block_transitions() {
        let store = PurchaseStore::open(Arc::new(FailingStorage));
        assert_eq!(store.current(), PurchaseStatus::Unknown);
        store.transition(PurchaseStatus::Purchased);
        assert_eq!(store.current(), PurchaseStatus::Purchased);
    }

    #[test]
    fn clones_share_status() {
        let store = PurchaseStore::open(Arc::new(MemoryFlagStorage::new()));
        let other = store.clone();
        other.transition(PurchaseStatus::Purchased);
        assert_eq!(store.current(), PurchaseStatus::Purchased);
    }
}

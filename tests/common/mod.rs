//! Shared test utilities: recording sinks, wired-up stores, and simulators
//! with known first outcomes.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;
use std::time::Duration;

use adfree::iap::{
    MemoryFlagStorage, PurchaseOutcome, PurchaseStore, RestoreOutcome, TransactionSimulator,
    REMOVE_ADS_KEY,
};
use adfree::ui::banner::{BannerAttributes, BannerSink};
use adfree::ui::purchase::{Alert, ScreenFrame, ScreenSink};
use parking_lot::Mutex;

/// Sink that records everything it is asked to render. Clones share buffers.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub frames: Arc<Mutex<Vec<ScreenFrame>>>,
    pub alerts: Arc<Mutex<Vec<Alert>>>,
    pub banners: Arc<Mutex<Vec<BannerAttributes>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<ScreenFrame> {
        self.frames.lock().clone()
    }

    pub fn last_frame(&self) -> ScreenFrame {
        self.frames.lock().last().cloned().expect("nothing rendered")
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn last_banner(&self) -> BannerAttributes {
        *self.banners.lock().last().expect("no banner rendered")
    }
}

impl ScreenSink for RecordingSink {
    fn render(&self, frame: &ScreenFrame) {
        self.frames.lock().push(frame.clone());
    }

    fn alert(&self, alert: &Alert) {
        self.alerts.lock().push(alert.clone());
    }
}

impl BannerSink for RecordingSink {
    fn render(&self, attributes: &BannerAttributes) {
        self.banners.lock().push(*attributes);
    }
}

/// Store over fresh in-memory storage, plus the storage for inspection.
pub fn fresh_store() -> (PurchaseStore, MemoryFlagStorage) {
    let storage = MemoryFlagStorage::new();
    (PurchaseStore::open(Arc::new(storage.clone())), storage)
}

/// Store whose persisted flag says the purchase is owned.
pub fn purchased_store() -> (PurchaseStore, MemoryFlagStorage) {
    let storage = MemoryFlagStorage::with_flag(REMOVE_ADS_KEY, true);
    (PurchaseStore::open(Arc::new(storage.clone())), storage)
}

/// Find a seed whose first purchase resolves to `want`.
pub async fn seed_for_purchase(want: PurchaseOutcome) -> u64 {
    for seed in 0..1_000 {
        let probe = TransactionSimulator::seeded(Duration::ZERO, seed);
        if probe.purchase().await == want {
            return seed;
        }
    }
    panic!("no seed yields {:?}", want);
}

/// Find a seed whose first restore resolves to `want`.
pub async fn seed_for_restore(want: RestoreOutcome) -> u64 {
    for seed in 0..1_000 {
        let probe = TransactionSimulator::seeded(Duration::ZERO, seed);
        if probe.restore().await == want {
            return seed;
        }
    }
    panic!("no seed yields {:?}", want);
}

/// Zero-latency simulator whose first purchase resolves to `want`.
pub async fn simulator_purchasing(want: PurchaseOutcome) -> TransactionSimulator {
    TransactionSimulator::seeded(Duration::ZERO, seed_for_purchase(want).await)
}

/// Zero-latency simulator whose first restore resolves to `want`.
pub async fn simulator_restoring(want: RestoreOutcome) -> TransactionSimulator {
    TransactionSimulator::seeded(Duration::ZERO, seed_for_restore(want).await)
}

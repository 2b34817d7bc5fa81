//! In-app purchase core: purchase status, its persisted store, and the
//! simulated payment provider.
//!
//! - `status.rs` - `PurchaseStatus` enum
//! - `storage.rs` - persistence boundary for the purchased flag
//! - `store.rs` - shared `PurchaseStore` handle
//! - `transaction.rs` - request kinds and per-kind outcomes
//! - `product.rs` - the product offered for sale
//! - `simulator.rs` - async stand-in for the payment provider

mod product;
mod simulator;
mod status;
mod storage;
mod store;
mod transaction;

pub use product::Product;
pub use simulator::{choose_uniform, TransactionSimulator, DEFAULT_DELAY};
pub use status::PurchaseStatus;
pub use storage::{FlagStorage, MemoryFlagStorage, StorageError, TomlFlagStorage};
pub use store::{PurchaseStore, REMOVE_ADS_KEY};
pub use transaction::{
    PurchaseOutcome, RestoreOutcome, TransactionKind, TransactionOutcome,
    PURCHASE_FAILED_MESSAGE, RESTORE_FAILED_MESSAGE,
};

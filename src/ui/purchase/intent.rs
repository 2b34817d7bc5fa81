//! Intents for the purchase screen.

use crate::iap::{PurchaseOutcome, RestoreOutcome};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseIntent {
    /// The product request resolved.
    ProductFetched,

    /// User tapped the purchase button.
    PurchaseTapped,

    /// User tapped the restore button.
    RestoreTapped,

    /// The in-flight purchase request resolved.
    PurchaseResolved(PurchaseOutcome),

    /// The in-flight restore request resolved.
    RestoreResolved(RestoreOutcome),
}

impl Intent for PurchaseIntent {}

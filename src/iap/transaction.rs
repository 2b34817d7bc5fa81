//! Transaction request kinds and their outcomes.
//!
//! Each request kind has its own outcome enum, so an outcome that does not
//! belong to the request that produced it cannot be constructed.
//! `TransactionOutcome` is the flat union used for logging and alerts.

use serde::Serialize;

pub const PURCHASE_FAILED_MESSAGE: &str = "Error Code 2253: Item is currently not purchasable.";
pub const RESTORE_FAILED_MESSAGE: &str = "Error Code 1456: Could Not Authorize User.";

/// Either a new purchase or a restore of a previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    NewPurchase,
    RestorePurchases,
}

/// Result of a `TransactionKind::NewPurchase` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PurchaseOutcome {
    Completed,
    Failed { message: String },
}

impl PurchaseOutcome {
    /// Every outcome a purchase request can produce.
    pub fn all() -> [PurchaseOutcome; 2] {
        [
            Self::Completed,
            Self::Failed {
                message: PURCHASE_FAILED_MESSAGE.to_string(),
            },
        ]
    }
}

/// Result of a `TransactionKind::RestorePurchases` request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RestoreOutcome {
    Restored,
    NothingToRestore,
    Failed { message: String },
}

impl RestoreOutcome {
    /// Every outcome a restore request can produce.
    pub fn all() -> [RestoreOutcome; 3] {
        [
            Self::Restored,
            Self::NothingToRestore,
            Self::Failed {
                message: RESTORE_FAILED_MESSAGE.to_string(),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionOutcome {
    PurchaseCompleted,
    PurchaseFailed { message: String },
    PurchaseRestored,
    NoPurchaseToRestore,
    RestoreFailed { message: String },
}

impl TransactionOutcome {
    /// The request kind that produced this outcome.
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::PurchaseCompleted | Self::PurchaseFailed { .. } => TransactionKind::NewPurchase,
            Self::PurchaseRestored | Self::NoPurchaseToRestore | Self::RestoreFailed { .. } => {
                TransactionKind::RestorePurchases
            }
        }
    }

    /// True when the outcome grants the purchase.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::PurchaseCompleted | Self::PurchaseRestored)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::PurchaseFailed { message } | Self::RestoreFailed { message } => Some(message),
            Self::PurchaseCompleted | Self::PurchaseRestored | Self::NoPurchaseToRestore => None,
        }
    }
}

impl From<PurchaseOutcome> for TransactionOutcome {
    fn from(outcome: PurchaseOutcome) -> Self {
        match outcome {
            PurchaseOutcome::Completed => Self::PurchaseCompleted,
            PurchaseOutcome::Failed { message } => Self::PurchaseFailed { message },
        }
    }
}

impl From<RestoreOutcome> for TransactionOutcome {
    fn from(outcome: RestoreOutcome) -> Self {
        match outcome {
            RestoreOutcome::Restored => Self::PurchaseRestored,
            RestoreOutcome::NothingToRestore => Self::NoPurchaseToRestore,
            RestoreOutcome::Failed { message } => Self::RestoreFailed { message },
        }
    }
}

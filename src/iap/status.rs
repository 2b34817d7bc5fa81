use serde::{Deserialize, Serialize};

/// Whether the "remove ads" purchase is owned.
///
/// `Unknown` means the purchase was never checked on this install;
/// `NotPurchased` means it was checked and is absent, failed, or was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStatus {
    #[default]
    Unknown,
    NotPurchased,
    Purchased,
}

impl PurchaseStatus {
    pub fn is_purchased(&self) -> bool {
        match self {
            Self::Purchased => true,
            Self::NotPurchased | Self::Unknown => false,
        }
    }

    /// Status restored from the persisted flag. A missing or `false` flag
    /// means the purchase was never confirmed, not that it is absent.
    pub fn from_persisted(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Purchased,
            Some(false) | None => Self::Unknown,
        }
    }
}

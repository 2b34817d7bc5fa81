use serde::Serialize;

use crate::iap::PurchaseStatus;
use crate::ui::mvi::{Projection, UiState};

/// Layout priority of the zero-height constraint while the banner shows.
const LOW_PRIORITY: u16 = 250;
/// Layout priority of the zero-height constraint while the banner is hidden.
const HIGH_PRIORITY: u16 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerViewState {
    #[default]
    Showing,
    Hidden,
}

impl UiState for BannerViewState {}

impl BannerViewState {
    pub fn from_status(status: PurchaseStatus) -> Self {
        match status {
            PurchaseStatus::Purchased => Self::Hidden,
            PurchaseStatus::NotPurchased | PurchaseStatus::Unknown => Self::Showing,
        }
    }
}

/// What the rendering layer applies to the banner container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerAttributes {
    pub hidden: bool,
    /// Showing the banner animates; hiding it snaps.
    pub animated: bool,
    /// The zero-height constraint is low priority, so the banner takes space.
    pub layout_priority_low: bool,
    pub zero_height_priority: u16,
    /// The reset affordance is only offered once ads are removed.
    pub reset_button_hidden: bool,
}

impl Projection for BannerViewState {
    type Attributes = BannerAttributes;

    fn attributes(&self) -> BannerAttributes {
        match self {
            Self::Showing => BannerAttributes {
                hidden: false,
                animated: true,
                layout_priority_low: true,
                zero_height_priority: LOW_PRIORITY,
                reset_button_hidden: true,
            },
            Self::Hidden => BannerAttributes {
                hidden: true,
                animated: false,
                layout_priority_low: false,
                zero_height_priority: HIGH_PRIORITY,
                reset_button_hidden: false,
            },
        }
    }
}

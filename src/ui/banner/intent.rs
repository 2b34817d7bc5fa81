use crate::iap::PurchaseStatus;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum BannerIntent {
    /// The host surface became visible; carries the status read at that moment.
    Appear { status: PurchaseStatus },
    /// User asked to forget the purchase and show ads again.
    ResetTapped,
}

impl Intent for BannerIntent {}

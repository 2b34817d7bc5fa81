use parking_lot::Mutex;

use crate::iap::{PurchaseStatus, PurchaseStore};
use crate::ui::mvi::{Projection, Reducer};

use super::intent::BannerIntent;
use super::reducer::BannerReducer;
use super::state::{BannerAttributes, BannerViewState};

/// Rendering layer for the banner. Applies attributes verbatim.
pub trait BannerSink: Send + Sync {
    fn render(&self, attributes: &BannerAttributes);
}

/// Banner controller bound to a shared `PurchaseStore`.
pub struct BannerView<S> {
    store: PurchaseStore,
    sink: S,
    state: Mutex<BannerViewState>,
}

impl<S: BannerSink> BannerView<S> {
    pub fn new(store: PurchaseStore, sink: S) -> Self {
        Self {
            store,
            sink,
            state: Mutex::new(BannerViewState::default()),
        }
    }

    pub fn state(&self) -> BannerViewState {
        *self.state.lock()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Host surface became visible: re-read the store and render.
    pub fn appear(&self) -> BannerAttributes {
        let status = self.store.current();
        self.dispatch(BannerIntent::Appear { status })
    }

    /// Show ads again and forget the purchase.
    pub fn reset(&self) -> BannerAttributes {
        let attributes = self.dispatch(BannerIntent::ResetTapped);
        tracing::info!("purchase reset by user");
        self.store.transition(PurchaseStatus::NotPurchased);
        attributes
    }

    fn dispatch(&self, intent: BannerIntent) -> BannerAttributes {
        let attributes = {
            let mut state = self.state.lock();
            let next = BannerReducer::reduce(*state, intent);
            tracing::debug!(from = ?*state, to = ?next, ?intent, "banner transition");
            *state = next;
            next.attributes()
        };
        self.sink.render(&attributes);
        attributes
    }
}

//! Purchase screen controller.
//!
//! Owns one activation of the screen: seeds the state from the store,
//! runs simulator requests on spawned tasks, and feeds their results back
//! through the reducer. Tasks only hold a `Weak` reference, so an outcome
//! that arrives after the screen was dropped is discarded.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::watch;

use crate::iap::{Product, PurchaseStatus, PurchaseStore, TransactionOutcome, TransactionSimulator};
use crate::ui::mvi::{Projection, Reducer};

use super::alert::{Alert, AlertToggle};
use super::intent::PurchaseIntent;
use super::reducer::PurchaseReducer;
use super::state::{PurchaseScreenState, ScreenAttributes};

/// Everything the rendering layer needs for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenFrame {
    pub state: PurchaseScreenState,
    pub attributes: ScreenAttributes,
    /// Formatted product line, once the product has been fetched.
    pub product_info: Option<String>,
    pub animated: bool,
}

/// Rendering layer for the purchase screen.
pub trait ScreenSink: Send + Sync + 'static {
    fn render(&self, frame: &ScreenFrame);

    fn alert(&self, alert: &Alert);
}

struct ScreenInner {
    state: PurchaseScreenState,
    product: Option<Product>,
    alerts: AlertToggle,
}

pub struct PurchaseScreen<S> {
    store: PurchaseStore,
    simulator: TransactionSimulator,
    sink: S,
    inner: Mutex<ScreenInner>,
    state_tx: watch::Sender<PurchaseScreenState>,
}

impl<S: ScreenSink> PurchaseScreen<S> {
    /// Activate the screen.
    ///
    /// Starts in `Purchased` when the store already owns the purchase,
    /// otherwise in `Fetching` with a product request running. The first
    /// render is not animated. Must be called within a Tokio runtime.
    pub fn activate(
        store: PurchaseStore,
        simulator: TransactionSimulator,
        sink: S,
        alerts: AlertToggle,
    ) -> Arc<Self> {
        let initial = if store.current().is_purchased() {
            PurchaseScreenState::Purchased
        } else {
            PurchaseScreenState::Fetching
        };
        tracing::debug!(state = ?initial, "purchase screen activated");

        let (state_tx, _) = watch::channel(initial);
        let screen = Arc::new(Self {
            store,
            simulator,
            sink,
            inner: Mutex::new(ScreenInner {
                state: initial,
                product: None,
                alerts,
            }),
            state_tx,
        });

        screen.enter(initial, false);
        if initial == PurchaseScreenState::Fetching {
            screen.spawn_product_fetch();
        }
        screen
    }

    pub fn state(&self) -> PurchaseScreenState {
        self.inner.lock().state
    }

    pub fn product(&self) -> Option<Product> {
        self.inner.lock().product.clone()
    }

    pub fn alerts(&self) -> AlertToggle {
        self.inner.lock().alerts
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Receiver that observes every state the screen settles in.
    pub fn subscribe(&self) -> watch::Receiver<PurchaseScreenState> {
        self.state_tx.subscribe()
    }

    /// Flip the alert toggle and return the new value.
    pub fn toggle_alerts(&self) -> AlertToggle {
        let mut inner = self.inner.lock();
        inner.alerts = inner.alerts.toggled();
        tracing::debug!(alerts = ?inner.alerts, "alert toggle flipped");
        inner.alerts
    }

    /// Purchase button tapped. Returns `false` if the tap was ignored
    /// because the current state does not accept it.
    pub fn tap_purchase(self: &Arc<Self>) -> bool {
        if !self.dispatch(PurchaseIntent::PurchaseTapped, None) {
            return false;
        }

        let weak = Arc::downgrade(self);
        let simulator = self.simulator.clone();
        tokio::spawn(async move {
            let outcome = simulator.purchase().await;
            let Some(screen) = upgrade(&weak, "purchase outcome") else {
                return;
            };
            let flat = TransactionOutcome::from(outcome.clone());
            screen.dispatch(PurchaseIntent::PurchaseResolved(outcome), Some(flat));
        });
        true
    }

    /// Restore button tapped. Returns `false` if the tap was ignored.
    pub fn tap_restore(self: &Arc<Self>) -> bool {
        if !self.dispatch(PurchaseIntent::RestoreTapped, None) {
            return false;
        }

        let weak = Arc::downgrade(self);
        let simulator = self.simulator.clone();
        tokio::spawn(async move {
            let outcome = simulator.restore().await;
            let Some(screen) = upgrade(&weak, "restore outcome") else {
                return;
            };
            let flat = TransactionOutcome::from(outcome.clone());
            screen.dispatch(PurchaseIntent::RestoreResolved(outcome), Some(flat));
        });
        true
    }

    fn spawn_product_fetch(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        let simulator = self.simulator.clone();
        tokio::spawn(async move {
            let product = simulator.request_product().await;
            let Some(screen) = upgrade(&weak, "product") else {
                return;
            };
            screen.inner.lock().product = Some(product);
            screen.dispatch(PurchaseIntent::ProductFetched, None);
        });
    }

    /// Run one intent through the reducer and apply its side effects.
    ///
    /// Returns `false` when the intent was not valid for the current state.
    fn dispatch(&self, intent: PurchaseIntent, outcome: Option<TransactionOutcome>) -> bool {
        let (from, to) = {
            let mut inner = self.inner.lock();
            let from = inner.state;
            tracing::debug!(state = ?from, ?intent, "dispatch");
            let to = PurchaseReducer::reduce(from, intent);
            inner.state = to;
            (from, to)
        };

        if from == to {
            tracing::debug!(state = ?from, "intent ignored");
            return false;
        }

        tracing::debug!(?from, ?to, "purchase screen transition");
        self.enter(to, true);
        if let Some(outcome) = outcome {
            self.notify(&outcome);
        }
        self.state_tx.send_replace(to);
        true
    }

    /// Side effects of being in `state`: commit success, then render.
    fn enter(&self, state: PurchaseScreenState, animated: bool) {
        if state.is_success() {
            tracing::info!(?state, "purchase committed");
            self.store.transition(PurchaseStatus::Purchased);
        }

        let product_info = self.inner.lock().product.as_ref().map(Product::to_string);
        let frame = ScreenFrame {
            state,
            attributes: state.attributes(),
            product_info,
            animated,
        };
        self.sink.render(&frame);
    }

    fn notify(&self, outcome: &TransactionOutcome) {
        if !self.alerts().is_on() {
            tracing::debug!(?outcome, "alert suppressed");
            return;
        }
        self.sink.alert(&Alert::for_outcome(outcome));
    }
}

impl<S> Drop for PurchaseScreen<S> {
    fn drop(&mut self) {
        tracing::debug!(state = ?self.inner.get_mut().state, "purchase screen deactivated");
    }
}

fn upgrade<T>(weak: &Weak<T>, what: &str) -> Option<Arc<T>> {
    let screen = weak.upgrade();
    if screen.is_none() {
        tracing::trace!(what, "screen deactivated before result arrived, dropping");
    }
    screen
}

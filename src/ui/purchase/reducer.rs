//! Reducer for the purchase screen.

use crate::iap::{PurchaseOutcome, RestoreOutcome};
use crate::ui::mvi::Reducer;

use super::intent::PurchaseIntent;
use super::state::PurchaseScreenState;

/// Reducer for purchase screen state transitions.
///
/// Pure function: committing a success into the `PurchaseStore`, starting
/// requests, and showing alerts are done by `PurchaseScreen` around the
/// dispatch call. Pairs not in the transition table leave the state as is.
pub struct PurchaseReducer;

impl Reducer for PurchaseReducer {
    type State = PurchaseScreenState;
    type Intent = PurchaseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        use PurchaseScreenState as S;

        match (state, intent) {
            (S::Fetching, PurchaseIntent::ProductFetched) => S::NotPurchased,

            (S::NotPurchased, PurchaseIntent::PurchaseTapped) => S::Purchasing,
            (S::NotPurchased, PurchaseIntent::RestoreTapped) => S::Restoring,

            (S::Purchasing, PurchaseIntent::PurchaseResolved(outcome)) => match outcome {
                PurchaseOutcome::Completed => S::Purchased,
                PurchaseOutcome::Failed { .. } => S::NotPurchased,
            },

            (S::Restoring, PurchaseIntent::RestoreResolved(outcome)) => match outcome {
                RestoreOutcome::Restored => S::Restored,
                RestoreOutcome::NothingToRestore | RestoreOutcome::Failed { .. } => {
                    S::NotPurchased
                }
            },

            (other, _) => other,
        }
    }
}

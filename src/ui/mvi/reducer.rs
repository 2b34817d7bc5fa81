//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where view-state transitions happen.
/// Intents that are not valid for the current state return it unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state. Must be pure.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

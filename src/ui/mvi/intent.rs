//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents are either user taps (purchase, restore, reset) or the
/// resolution of a simulated request (product fetched, outcome delivered).
pub trait Intent: Send + 'static {}

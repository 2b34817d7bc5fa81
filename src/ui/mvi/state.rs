//! Base trait for UI state in the MVI architecture.

/// Marker trait for view-state enums.
///
/// States are small `Copy` enums: every value carries everything the
/// projection needs, so rendering never reads anything else.
pub trait UiState: Copy + Eq + Send + std::fmt::Debug + 'static {}

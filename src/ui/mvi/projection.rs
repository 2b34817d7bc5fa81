//! Projection from a view state to the attribute record a renderer applies.

use super::state::UiState;

/// A total mapping from a view state to its presentation attributes.
///
/// Implementations match exhaustively on the state so that adding a
/// variant fails to compile until every attribute is defined for it.
pub trait Projection: UiState {
    /// Flat attribute record consumed by the rendering layer.
    type Attributes: Clone + PartialEq + std::fmt::Debug;

    fn attributes(&self) -> Self::Attributes;
}

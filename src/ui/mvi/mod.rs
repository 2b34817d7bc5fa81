//! Model-View-Intent (MVI) primitives for the purchase flow screens.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Projection ──→ Sink
//!    ↑                                             │
//!    └──────────── taps / async outcomes ──────────┘
//! ```
//!
//! - **State**: small closed enum describing what the screen is doing
//! - **Intent**: user taps or resolved simulator requests
//! - **Reducer**: pure `(State, Intent) -> State`
//! - **Projection**: pure `State -> Attributes`, applied verbatim by a sink

mod intent;
mod projection;
mod reducer;
mod state;

pub use intent::Intent;
pub use projection::Projection;
pub use reducer::Reducer;
pub use state::UiState;

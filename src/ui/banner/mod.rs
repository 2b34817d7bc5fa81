//! Ad banner feature module.
//!
//! The banner is hidden once the purchase is owned. It is a pull model:
//! the host calls `BannerView::appear` whenever it becomes visible and the
//! banner re-reads the store, so a change made while the banner is on
//! screen is picked up on the next appearance.
//!
//! - `state.rs` - `BannerViewState` and its projection
//! - `intent.rs` - appearance and reset actions
//! - `reducer.rs` - state transitions
//! - `view.rs` - controller wiring the store to a `BannerSink`

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BannerIntent;
pub use reducer::BannerReducer;
pub use state::{BannerAttributes, BannerViewState};
pub use view::{BannerSink, BannerView};

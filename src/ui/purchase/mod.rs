//! "Remove ads" purchase screen feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state enum and its attribute projection
//! - `intent.rs` - Taps and resolved simulator requests
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `alert.rs` - Outcome alerts and the toggle that gates them
//! - `screen.rs` - Controller running requests and committing purchases

mod alert;
mod intent;
mod reducer;
mod screen;
mod state;

pub use alert::{Alert, AlertToggle};
pub use intent::PurchaseIntent;
pub use reducer::PurchaseReducer;
pub use screen::{PurchaseScreen, ScreenFrame, ScreenSink};
pub use state::{
    ButtonAttributes, PurchaseScreenState, ScreenAttributes, PURCHASE_AREA_HEIGHT,
};

//! View-state management for a "remove ads" in-app purchase flow.
//!
//! - [`iap`] holds the purchase status store and the simulated provider.
//! - [`ui`] holds the banner and purchase-screen state machines and their
//!   projections to presentation attributes.

pub mod cli;
pub mod config;
pub mod iap;
pub mod logging;
pub mod ui;

//! View-state layer: MVI primitives plus the banner and purchase screens.

pub mod banner;
pub mod mvi;
pub mod purchase;

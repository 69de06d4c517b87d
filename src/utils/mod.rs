//! Utility functions shared by the `sufx` binary.
//!
//! ## Modules
//!
//! - [`progress`] - Construction progress bar (no-op without the `progress` feature)

pub mod progress;

pub use progress::*;

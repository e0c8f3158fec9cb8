//! Utility functions module
//!
//! Process-level helpers for the game binary.

pub mod signals;

pub use signals::shutdown_signal;

//! Countdown timer module
//!
//! This module contains the drift-corrected countdown, its configuration and
//! the error types shared with the turn controller.

pub mod config;
pub mod countdown;
pub mod error;

// Re-export main types
pub use config::{TimerConfig, DEFAULT_TICK_INTERVAL};
pub use countdown::{CountdownTimer, TimerCallbacks};
pub use error::{GameError, TimerError};

//! Game orchestration module
//!
//! This module contains the game modes and the turn controller that consumes
//! the countdown.

pub mod command;
pub mod controller;
pub mod mode;

// Re-export main types
pub use command::{ParseCommandError, PlayerCommand};
pub use controller::TurnController;
pub use mode::{GameMode, TURN_COUNT};

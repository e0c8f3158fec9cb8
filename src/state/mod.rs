//! State management module
//!
//! This module contains the snapshots the timer and the turn controller
//! publish to whoever renders the game.

pub mod timer_state;
pub mod turn_state;

// Re-export main types
pub use timer_state::{TimerState, TimerStatus};
pub use turn_state::{GameReport, TurnOutcome, TurnPhase, TurnSummary};

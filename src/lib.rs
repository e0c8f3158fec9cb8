//! Yeri Countdown - drift-corrected turn timer for a spot-the-difference game
//!
//! This library provides a countdown that recomputes remaining time from an
//! injected clock, so late ticks catch up instead of compounding, together
//! with the turn controller that pauses it around hints, stops it when a turn
//! is cleared early and advances through the game's three turns.

pub mod clock;
pub mod config;
pub mod game;
pub mod state;
pub mod tasks;
pub mod timer;
pub mod utils;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, TickHandle, TokioClock};
pub use config::Config;
pub use game::{GameMode, PlayerCommand, TurnController};
pub use state::{GameReport, TimerState, TimerStatus, TurnOutcome, TurnPhase};
pub use timer::{CountdownTimer, GameError, TimerCallbacks, TimerConfig, TimerError};
pub use utils::signals::shutdown_signal;

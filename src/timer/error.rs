//! Error types for the countdown and the turn controller

use thiserror::Error;

/// Errors reported synchronously by the countdown timer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimerError {
    #[error("invalid timer configuration: {field} must be a positive number of seconds, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },

    #[error("timer has no configuration to reset to; start it first or pass a duration")]
    NotConfigured,
}

/// Errors reported by the turn controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("hint is not available in turn {turn}")]
    HintUnavailable { turn: u8 },

    #[error("turn {turn} is not in play")]
    TurnNotInPlay { turn: u8 },

    #[error("the game is over")]
    GameOver,

    #[error("a scene needs at least one change to find")]
    InvalidChanges,
}

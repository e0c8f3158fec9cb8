//! Turn progress and end-of-game summaries

use serde::{Deserialize, Serialize};

use crate::game::GameMode;

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOutcome {
    /// Every change was found before the deadline
    Cleared,
    TimedOut,
}

/// Where the controller is within the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "outcome", rename_all = "snake_case")]
pub enum TurnPhase {
    /// Created, first turn not begun
    Ready,
    Playing,
    /// Hint reveal open; the countdown is paused
    Hint,
    Finished(TurnOutcome),
    GameOver,
}

impl TurnPhase {
    pub fn is_finished(&self) -> bool {
        matches!(self, TurnPhase::Finished(_))
    }
}

/// Record of one completed turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub turn: u8,
    pub limit_seconds: f64,
    /// Active countdown time spent, pauses excluded
    pub used_seconds: f64,
    pub found: u32,
    pub total_changes: u32,
    pub hint_used: bool,
    pub outcome: TurnOutcome,
}

/// Summary of a finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub mode: GameMode,
    pub turns: Vec<TurnSummary>,
}

impl GameReport {
    pub fn cleared_turns(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.outcome == TurnOutcome::Cleared)
            .count()
    }

    pub fn total_found(&self) -> u32 {
        self.turns.iter().map(|turn| turn.found).sum()
    }
}

//! Game modes and their per-turn time limits

use std::{fmt, time::Duration};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Number of turns in a game
pub const TURN_COUNT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// 3 s, 10 s, 30 s
    QuickDate,
    /// 3 s, 10 s, 60 s
    LongDate,
}

impl GameMode {
    /// Time limit of `turn` (1-based); turns past the last reuse the last limit
    pub fn turn_limit(&self, turn: u8) -> Duration {
        let secs = match (self, turn) {
            (_, 0 | 1) => 3,
            (_, 2) => 10,
            (GameMode::QuickDate, _) => 30,
            (GameMode::LongDate, _) => 60,
        };
        Duration::from_secs(secs)
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::QuickDate => "quick_date",
            GameMode::LongDate => "long_date",
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::QuickDate
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_limits() {
        let quick: Vec<u64> = (1..=TURN_COUNT)
            .map(|turn| GameMode::QuickDate.turn_limit(turn).as_secs())
            .collect();
        let long: Vec<u64> = (1..=TURN_COUNT)
            .map(|turn| GameMode::LongDate.turn_limit(turn).as_secs())
            .collect();
        assert_eq!(quick, vec![3, 10, 30]);
        assert_eq!(long, vec![3, 10, 60]);
    }
}

//! Player commands accepted by the turn driver

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Open the hint reveal (turn 2)
    Hint,
    /// Close the hint reveal
    HintDone,
    /// A judged answer
    Answer { correct: bool },
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command '{0}' (expected hint, done, o, x or quit)")]
pub struct ParseCommandError(pub String);

impl FromStr for PlayerCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hint" => Ok(PlayerCommand::Hint),
            "d" | "done" => Ok(PlayerCommand::HintDone),
            "o" | "y" | "found" => Ok(PlayerCommand::Answer { correct: true }),
            "x" | "n" | "miss" => Ok(PlayerCommand::Answer { correct: false }),
            "q" | "quit" | "exit" => Ok(PlayerCommand::Quit),
            other => Err(ParseCommandError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("hint".parse(), Ok(PlayerCommand::Hint));
        assert_eq!(" D ".parse(), Ok(PlayerCommand::HintDone));
        assert_eq!("o".parse(), Ok(PlayerCommand::Answer { correct: true }));
        assert_eq!("x".parse(), Ok(PlayerCommand::Answer { correct: false }));
        assert_eq!("quit".parse(), Ok(PlayerCommand::Quit));
        assert_eq!(
            "jump".parse::<PlayerCommand>(),
            Err(ParseCommandError("jump".to_string()))
        );
    }
}

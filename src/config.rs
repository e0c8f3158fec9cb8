//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::game::GameMode;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "yeri-countdown")]
#[command(about = "Play the three-turn spot-the-difference countdown in the terminal")]
#[command(version)]
pub struct Config {
    /// Game mode deciding the per-turn time limits
    #[arg(short, long, value_enum, default_value = "quick-date")]
    pub mode: GameMode,

    /// Number of changes hidden in the scene
    #[arg(short, long, default_value = "2")]
    pub changes: u32,

    /// Countdown tick interval in milliseconds
    #[arg(short, long, default_value = "100")]
    pub tick_ms: u64,

    /// Pause between a finished turn and the next one, in milliseconds
    #[arg(long, default_value = "2000")]
    pub turn_gap_ms: u64,

    /// Print countdown updates and the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Interval between countdown notifications
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Delay before the next turn starts
    pub fn turn_gap(&self) -> Duration {
        Duration::from_millis(self.turn_gap_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["yeri-countdown"]).unwrap();
        assert_eq!(config.mode, GameMode::QuickDate);
        assert_eq!(config.changes, 2);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.turn_gap(), Duration::from_secs(2));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_long_date_verbose() {
        let config =
            Config::try_parse_from(["yeri-countdown", "--mode", "long-date", "-v", "-t", "250"])
                .unwrap();
        assert_eq!(config.mode, GameMode::LongDate);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.log_level(), "debug");
    }
}

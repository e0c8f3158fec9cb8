//! Countdown rendering task

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use crate::state::{GameReport, TimerState, TimerStatus, TurnOutcome};

const BAR_WIDTH: usize = 20;

/// One line of `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub state: TimerState,
}

impl DisplayEvent {
    pub fn new(state: TimerState) -> Self {
        Self {
            timestamp: Utc::now(),
            state,
        }
    }
}

/// Render every countdown update published by the controller.
///
/// Text mode prints when the whole-second value or the status changes; JSON
/// mode prints every update.
pub async fn display_task(mut updates: watch::Receiver<TimerState>, json: bool) {
    let mut last_shown: Option<(u64, TimerStatus)> = None;

    while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        if json {
            match serde_json::to_string(&DisplayEvent::new(state)) {
                Ok(line) => println!("{}", line),
                Err(e) => debug!("Failed to encode display event: {}", e),
            }
            continue;
        }

        let key = (state.remaining_seconds.ceil() as u64, state.status);
        if last_shown != Some(key) {
            last_shown = Some(key);
            println!("{}", format_countdown(&state));
        }
    }
    debug!("Display channel closed");
}

/// `[##########----------]  5.0s / 10.0s  running`
pub fn format_countdown(state: &TimerState) -> String {
    let filled = (state.progress() * BAR_WIDTH as f64).round() as usize;
    let bar: String = std::iter::repeat('#')
        .take(filled)
        .chain(std::iter::repeat('-').take(BAR_WIDTH - filled))
        .collect();
    format!(
        "[{}] {:>5.1}s / {:.1}s  {}",
        bar,
        state.remaining_seconds,
        state.total_seconds,
        status_label(state.status)
    )
}

fn status_label(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Idle => "idle",
        TimerStatus::Running => "running",
        TimerStatus::Paused => "paused",
        TimerStatus::Stopped => "stopped",
        TimerStatus::Completed => "time up",
    }
}

/// End-of-game summary, as a table or pretty JSON
pub fn format_report(report: &GameReport, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![format!("Mode: {}", report.mode)];
    for turn in &report.turns {
        let outcome = match turn.outcome {
            TurnOutcome::Cleared => "cleared",
            TurnOutcome::TimedOut => "timed out",
        };
        lines.push(format!(
            "Turn {}: {}/{} found, {:.1}s of {:.0}s{} - {}",
            turn.turn,
            turn.found,
            turn.total_changes,
            turn.used_seconds,
            turn.limit_seconds,
            if turn.hint_used { " (hint)" } else { "" },
            outcome
        ));
    }
    lines.push(format!(
        "Cleared {} of {} turns, {} changes found",
        report.cleared_turns(),
        report.turns.len(),
        report.total_found()
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{game::GameMode, state::TurnSummary};

    #[test]
    fn test_format_countdown_half_way() {
        let state = TimerState::with_status(
            TimerStatus::Paused,
            Duration::from_secs(10),
            Duration::from_secs(5),
        );
        assert_eq!(
            format_countdown(&state),
            "[##########----------]   5.0s / 10.0s  paused"
        );
    }

    #[test]
    fn test_format_countdown_at_zero() {
        let state =
            TimerState::with_status(TimerStatus::Completed, Duration::from_secs(3), Duration::ZERO);
        assert_eq!(
            format_countdown(&state),
            "[--------------------]   0.0s / 3.0s  time up"
        );
    }

    #[test]
    fn test_format_report_text() {
        let report = GameReport {
            mode: GameMode::QuickDate,
            turns: vec![TurnSummary {
                turn: 2,
                limit_seconds: 10.0,
                used_seconds: 4.3,
                found: 2,
                total_changes: 2,
                hint_used: true,
                outcome: TurnOutcome::Cleared,
            }],
        };
        let text = format_report(&report, false);
        assert!(text.starts_with("Mode: quick_date"));
        assert!(text.contains("Turn 2: 2/2 found, 4.3s of 10s (hint) - cleared"));
        assert!(text.ends_with("Cleared 1 of 1 turns, 2 changes found"));
    }

    #[test]
    fn test_display_event_flattens_state() {
        let event = DisplayEvent::new(TimerState::new());
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["status"], "idle");
        assert!(value.get("timestamp").is_some());
    }
}

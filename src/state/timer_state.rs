//! Timer state snapshot published to displays

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where a countdown is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Never started
    Idle,
    Running,
    Paused,
    /// Abandoned with `stop`; completion will not fire
    Stopped,
    /// Reached zero and fired completion
    Completed,
}

/// Read-only view of a countdown for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub status: TimerStatus,
    pub total_seconds: f64,
    pub remaining_seconds: f64,
}

impl TimerState {
    /// Create an idle timer state
    pub fn new() -> Self {
        Self {
            status: TimerStatus::Idle,
            total_seconds: 0.0,
            remaining_seconds: 0.0,
        }
    }

    /// Create a timer state with the given status and durations
    pub fn with_status(status: TimerStatus, total: Duration, remaining: Duration) -> Self {
        Self {
            status,
            total_seconds: total.as_secs_f64(),
            remaining_seconds: remaining.as_secs_f64(),
        }
    }

    /// Check if the timer is advancing
    pub fn is_active(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Fraction of the countdown left, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.total_seconds <= 0.0 {
            return 0.0;
        }
        (self.remaining_seconds / self.total_seconds).clamp(0.0, 1.0)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

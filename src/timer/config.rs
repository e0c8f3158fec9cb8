//! Per-run countdown configuration

use std::time::Duration;

use super::TimerError;

/// Cadence of remaining-time notifications when none is given
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Immutable configuration of one countdown run.
///
/// Both durations are strictly positive; the constructors are the only way
/// to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    total_duration: Duration,
    tick_interval: Duration,
}

impl TimerConfig {
    /// Countdown of `total_duration` ticking every 100 ms
    pub fn new(total_duration: Duration) -> Result<Self, TimerError> {
        Self::with_tick_interval(total_duration, DEFAULT_TICK_INTERVAL)
    }

    pub fn with_tick_interval(
        total_duration: Duration,
        tick_interval: Duration,
    ) -> Result<Self, TimerError> {
        if total_duration.is_zero() {
            return Err(TimerError::InvalidConfiguration {
                field: "total_duration",
                value: 0.0,
            });
        }
        if tick_interval.is_zero() {
            return Err(TimerError::InvalidConfiguration {
                field: "tick_interval",
                value: 0.0,
            });
        }
        Ok(Self {
            total_duration,
            tick_interval,
        })
    }

    /// Build from seconds as a real number, rejecting zero, negative and
    /// non-finite values
    pub fn from_secs_f64(total_secs: f64, tick_secs: f64) -> Result<Self, TimerError> {
        let total_duration = positive_secs("total_duration", total_secs)?;
        let tick_interval = positive_secs("tick_interval", tick_secs)?;
        Self::with_tick_interval(total_duration, tick_interval)
    }

    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Same cadence, different length
    pub fn with_total_duration(&self, total_duration: Duration) -> Result<Self, TimerError> {
        Self::with_tick_interval(total_duration, self.tick_interval)
    }
}

fn positive_secs(field: &'static str, secs: f64) -> Result<Duration, TimerError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(TimerError::InvalidConfiguration { field, value: secs });
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|_| TimerError::InvalidConfiguration { field, value: secs })
}

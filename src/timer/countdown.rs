//! Drift-corrected countdown driven by an injected clock

use std::{fmt, time::Duration};
use tracing::{debug, info};

use super::{TimerConfig, TimerError, DEFAULT_TICK_INTERVAL};
use crate::{
    clock::{Clock, TickHandle},
    state::{TimerState, TimerStatus},
};

type TickFn = Box<dyn FnMut(Duration) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;

/// Listeners installed with [`CountdownTimer::start`]
#[derive(Default)]
pub struct TimerCallbacks {
    on_tick: Option<TickFn>,
    on_complete: Option<CompleteFn>,
}

impl TimerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the remaining time at every tick, and once with zero at completion
    pub fn on_tick<F>(mut self, f: F) -> Self
    where
        F: FnMut(Duration) + Send + 'static,
    {
        self.on_tick = Some(Box::new(f));
        self
    }

    /// Called once per run when the countdown reaches zero
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    fn tick(&mut self, remaining: Duration) {
        if let Some(on_tick) = self.on_tick.as_mut() {
            on_tick(remaining);
        }
    }

    fn complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }
}

impl fmt::Debug for TimerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerCallbacks")
            .field("on_tick", &self.on_tick.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Mutable state of the current run
#[derive(Debug, Clone, Copy, Default)]
struct TimerRun {
    accumulated_elapsed: Duration,
    /// Start of the current active interval; `None` while not advancing
    run_start: Option<Duration>,
    has_completed: bool,
    stopped: bool,
}

impl TimerRun {
    fn is_active(&self) -> bool {
        self.run_start.is_some()
    }

    fn elapsed_at(&self, now: Duration) -> Duration {
        let live = self
            .run_start
            .map(|start| now.saturating_sub(start))
            .unwrap_or_default();
        self.accumulated_elapsed + live
    }
}

/// Countdown from a configured duration to zero.
///
/// Remaining time is always recomputed from clock readings, so a tick that
/// fires late reports the true remaining time instead of accumulating the
/// delay. The timer holds at most one scheduled tick; the host delivers it
/// through [`on_tick`](Self::on_tick) and any handle other than the current
/// one is discarded.
#[derive(Debug)]
pub struct CountdownTimer<C: Clock> {
    clock: C,
    config: Option<TimerConfig>,
    run: TimerRun,
    pending: Option<TickHandle>,
    callbacks: TimerCallbacks,
}

impl<C: Clock> CountdownTimer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            config: None,
            run: TimerRun::default(),
            pending: None,
            callbacks: TimerCallbacks::new(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> Option<&TimerConfig> {
        self.config.as_ref()
    }

    /// Begin a new run, replacing any run in progress
    pub fn start(&mut self, config: TimerConfig, callbacks: TimerCallbacks) {
        self.callbacks = callbacks;
        self.begin_run(config);
    }

    /// Start over with the current callbacks, optionally with a new duration
    pub fn reset(&mut self, new_duration: Option<Duration>) -> Result<(), TimerError> {
        let config = match (new_duration, self.config) {
            (Some(total), Some(current)) => current.with_total_duration(total)?,
            (Some(total), None) => TimerConfig::with_tick_interval(total, DEFAULT_TICK_INTERVAL)?,
            (None, Some(current)) => current,
            (None, None) => return Err(TimerError::NotConfigured),
        };
        self.begin_run(config);
        Ok(())
    }

    /// Freeze the countdown; no-op unless running
    pub fn pause(&mut self) {
        let Some(start) = self.run.run_start else {
            debug!("Pause ignored, timer is not running");
            return;
        };
        let now = self.clock.now();
        self.run.accumulated_elapsed += now.saturating_sub(start);
        self.run.run_start = None;
        self.cancel_pending();
        debug!("Timer paused with {:?} remaining", self.remaining());
    }

    /// Continue a paused countdown; no-op when running, finished or never started
    pub fn resume(&mut self) {
        if self.run.is_active() || self.run.has_completed || self.run.stopped || self.config.is_none() {
            debug!("Resume ignored, timer is {:?}", self.status());
            return;
        }
        self.run.run_start = Some(self.clock.now());
        self.schedule_next();
        debug!("Timer resumed with {:?} remaining", self.remaining());
    }

    /// Abandon the run without firing completion
    pub fn stop(&mut self) {
        if self.config.is_none() || self.run.stopped || self.run.has_completed {
            return;
        }
        let now = self.clock.now();
        self.run.accumulated_elapsed = self.run.elapsed_at(now);
        self.run.run_start = None;
        self.run.stopped = true;
        self.cancel_pending();
        info!("Timer stopped with {:?} remaining", self.remaining());
    }

    /// Deliver a scheduled tick
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.pending != Some(handle) {
            debug!("Discarding stale tick {}", handle.id());
            return;
        }
        self.pending = None;

        let remaining = self.remaining();
        if remaining.is_zero() {
            self.complete();
            return;
        }

        self.callbacks.tick(remaining);
        self.schedule_next();
    }

    /// Time left in the current run, zero when idle
    pub fn remaining(&self) -> Duration {
        match self.config {
            Some(config) => config.total_duration().saturating_sub(self.elapsed()),
            None => Duration::ZERO,
        }
    }

    /// Active time consumed by the current run
    pub fn elapsed(&self) -> Duration {
        self.run.elapsed_at(self.clock.now())
    }

    pub fn is_active(&self) -> bool {
        self.run.is_active()
    }

    pub fn has_completed(&self) -> bool {
        self.run.has_completed
    }

    pub fn status(&self) -> TimerStatus {
        if self.config.is_none() {
            TimerStatus::Idle
        } else if self.run.has_completed {
            TimerStatus::Completed
        } else if self.run.stopped {
            TimerStatus::Stopped
        } else if self.run.is_active() {
            TimerStatus::Running
        } else {
            TimerStatus::Paused
        }
    }

    pub fn snapshot(&self) -> TimerState {
        match self.config {
            Some(config) => {
                TimerState::with_status(self.status(), config.total_duration(), self.remaining())
            }
            None => TimerState::new(),
        }
    }

    fn begin_run(&mut self, config: TimerConfig) {
        self.cancel_pending();
        self.config = Some(config);
        self.run = TimerRun {
            run_start: Some(self.clock.now()),
            ..TimerRun::default()
        };
        self.schedule_next();
        info!(
            "Countdown started: {:?} total, ticking every {:?}",
            config.total_duration(),
            config.tick_interval()
        );
    }

    fn complete(&mut self) {
        if let Some(config) = self.config {
            self.run.accumulated_elapsed = config.total_duration();
        }
        self.run.run_start = None;
        self.run.has_completed = true;
        self.cancel_pending();
        info!("Countdown completed");
        self.callbacks.tick(Duration::ZERO);
        self.callbacks.complete();
    }

    fn schedule_next(&mut self) {
        let Some(config) = self.config else {
            return;
        };
        self.cancel_pending();
        let delay = config.tick_interval().min(self.remaining());
        self.pending = Some(self.clock.schedule(delay));
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.clock.cancel(handle);
        }
    }
}

impl<C: Clock> Drop for CountdownTimer<C> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

//! Turn controller: drives the countdown from game events

use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::{GameMode, TURN_COUNT};
use crate::{
    clock::{Clock, TickHandle},
    state::{GameReport, TimerState, TurnOutcome, TurnPhase, TurnSummary},
    timer::{CountdownTimer, GameError, TimerCallbacks, TimerConfig},
};

/// Notification forwarded from the timer callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    Tick(Duration),
    Complete,
}

/// Owns one countdown and moves the game through its turns.
///
/// The displayed countdown is fed only from the timer's tick callback; the
/// controller never derives remaining time on its own.
#[derive(Debug)]
pub struct TurnController<C: Clock> {
    mode: GameMode,
    total_changes: u32,
    tick_interval: Duration,
    turn: u8,
    found: u32,
    hint_used: bool,
    phase: TurnPhase,
    timer: CountdownTimer<C>,
    events_tx: mpsc::UnboundedSender<TimerEvent>,
    events_rx: mpsc::UnboundedReceiver<TimerEvent>,
    display_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    _display_rx: watch::Receiver<TimerState>,
    summaries: Vec<TurnSummary>,
}

impl<C: Clock> TurnController<C> {
    pub fn new(
        clock: C,
        mode: GameMode,
        total_changes: u32,
        tick_interval: Duration,
    ) -> Result<Self, GameError> {
        if total_changes == 0 {
            return Err(GameError::InvalidChanges);
        }
        // Reject a bad cadence before the first turn
        TimerConfig::with_tick_interval(mode.turn_limit(1), tick_interval)?;

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (display_tx, display_rx) = watch::channel(TimerState::new());

        Ok(Self {
            mode,
            total_changes,
            tick_interval,
            turn: 0,
            found: 0,
            hint_used: false,
            phase: TurnPhase::Ready,
            timer: CountdownTimer::new(clock),
            events_tx,
            events_rx,
            display_tx,
            _display_rx: display_rx,
            summaries: Vec::new(),
        })
    }

    /// Receiver for the displayed countdown
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.display_tx.subscribe()
    }

    /// Start the first turn
    pub fn begin(&mut self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::Ready => self.start_turn(1),
            TurnPhase::GameOver => Err(GameError::GameOver),
            _ => Err(GameError::TurnNotInPlay { turn: self.turn }),
        }
    }

    /// Open the hint reveal, pausing the countdown. Turn 2 only, once per turn.
    pub fn open_hint(&mut self) -> Result<(), GameError> {
        if self.phase != TurnPhase::Playing {
            return Err(GameError::TurnNotInPlay { turn: self.turn });
        }
        if !self.hint_available() {
            return Err(GameError::HintUnavailable { turn: self.turn });
        }
        self.hint_used = true;
        self.timer.pause();
        self.phase = TurnPhase::Hint;
        self.publish(self.timer.remaining());
        info!("Hint opened in turn {}, countdown paused", self.turn);
        Ok(())
    }

    /// Close the hint reveal and resume the countdown; no-op if no hint is open
    pub fn close_hint(&mut self) {
        if self.phase != TurnPhase::Hint {
            debug!("No hint open, nothing to close");
            return;
        }
        self.phase = TurnPhase::Playing;
        self.timer.resume();
        self.publish(self.timer.remaining());
        info!("Hint closed in turn {}, countdown resumed", self.turn);
    }

    /// Record a judged answer; finding the last change ends the turn early
    pub fn record_answer(&mut self, correct: bool) -> Result<TurnPhase, GameError> {
        match self.phase {
            TurnPhase::Playing => {}
            TurnPhase::GameOver => return Err(GameError::GameOver),
            _ => return Err(GameError::TurnNotInPlay { turn: self.turn }),
        }

        if correct {
            self.found += 1;
            info!(
                "Turn {}: found {}/{} changes",
                self.turn, self.found, self.total_changes
            );
        } else {
            debug!("Turn {}: wrong answer", self.turn);
        }

        if self.found >= self.total_changes {
            self.timer.stop();
            self.finish_turn(TurnOutcome::Cleared);
        }
        Ok(self.phase)
    }

    /// Deliver a scheduled tick to the countdown and react to what it reports
    pub fn on_tick(&mut self, handle: TickHandle) {
        self.timer.on_tick(handle);
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                TimerEvent::Tick(remaining) => self.publish(remaining),
                TimerEvent::Complete => {
                    if self.phase == TurnPhase::Playing {
                        info!("Turn {} timed out", self.turn);
                        self.finish_turn(TurnOutcome::TimedOut);
                    }
                }
            }
        }
    }

    /// Move past a finished turn: start the next one or end the game
    pub fn advance(&mut self) -> Result<TurnPhase, GameError> {
        match self.phase {
            TurnPhase::Finished(_) => {}
            TurnPhase::GameOver => return Err(GameError::GameOver),
            _ => return Err(GameError::TurnNotInPlay { turn: self.turn }),
        }

        if self.turn < TURN_COUNT {
            self.start_turn(self.turn + 1)?;
        } else {
            self.phase = TurnPhase::GameOver;
            info!(
                "Game over: {}/{} turns cleared",
                self.report().cleared_turns(),
                TURN_COUNT
            );
        }
        Ok(self.phase)
    }

    pub fn hint_available(&self) -> bool {
        self.turn == 2 && !self.hint_used
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn turn(&self) -> u8 {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn found(&self) -> u32 {
        self.found
    }

    pub fn total_changes(&self) -> u32 {
        self.total_changes
    }

    pub fn timer(&self) -> &CountdownTimer<C> {
        &self.timer
    }

    pub fn clock(&self) -> &C {
        self.timer.clock()
    }

    pub fn summaries(&self) -> &[TurnSummary] {
        &self.summaries
    }

    pub fn report(&self) -> GameReport {
        GameReport {
            mode: self.mode,
            turns: self.summaries.clone(),
        }
    }

    fn start_turn(&mut self, turn: u8) -> Result<(), GameError> {
        let limit = self.mode.turn_limit(turn);
        let config = TimerConfig::with_tick_interval(limit, self.tick_interval)?;

        // Anything still queued belongs to the previous turn's run
        while self.events_rx.try_recv().is_ok() {}

        self.turn = turn;
        self.found = 0;
        self.hint_used = false;
        self.phase = TurnPhase::Playing;

        let tick_tx = self.events_tx.clone();
        let complete_tx = self.events_tx.clone();
        let callbacks = TimerCallbacks::new()
            .on_tick(move |remaining| {
                let _ = tick_tx.send(TimerEvent::Tick(remaining));
            })
            .on_complete(move || {
                let _ = complete_tx.send(TimerEvent::Complete);
            });
        self.timer.start(config, callbacks);
        self.publish(limit);

        info!("Turn {} started with a {:?} limit", turn, limit);
        Ok(())
    }

    fn finish_turn(&mut self, outcome: TurnOutcome) {
        let limit = self.mode.turn_limit(self.turn);
        let summary = TurnSummary {
            turn: self.turn,
            limit_seconds: limit.as_secs_f64(),
            used_seconds: self.timer.elapsed().min(limit).as_secs_f64(),
            found: self.found,
            total_changes: self.total_changes,
            hint_used: self.hint_used,
            outcome,
        };
        info!(
            "Turn {} finished ({:?}): {}/{} found in {:.1}s",
            summary.turn, outcome, summary.found, summary.total_changes, summary.used_seconds
        );
        self.summaries.push(summary);
        self.phase = TurnPhase::Finished(outcome);
        self.publish(self.timer.remaining());
    }

    fn publish(&self, remaining: Duration) {
        let total = self
            .timer
            .config()
            .map(|config| config.total_duration())
            .unwrap_or_default();
        let state = TimerState::with_status(self.timer.status(), total, remaining);
        if let Err(e) = self.display_tx.send(state) {
            warn!("Failed to send timer update: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::ManualClock, state::TimerStatus};

    fn controller(clock: &ManualClock) -> TurnController<ManualClock> {
        TurnController::new(
            clock.clone(),
            GameMode::QuickDate,
            2,
            Duration::from_millis(100),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_scene() {
        let result = TurnController::new(
            ManualClock::new(),
            GameMode::QuickDate,
            0,
            Duration::from_millis(100),
        );
        assert_eq!(result.err(), Some(GameError::InvalidChanges));
    }

    #[test]
    fn test_begin_seeds_display_with_full_limit() {
        let clock = ManualClock::new();
        let mut game = controller(&clock);
        let display = game.subscribe();

        game.begin().unwrap();
        let state = display.borrow().clone();
        assert_eq!(state.status, TimerStatus::Running);
        assert_eq!(state.remaining_seconds, 3.0);
        assert_eq!(game.begin(), Err(GameError::TurnNotInPlay { turn: 1 }));
    }

    #[test]
    fn test_hint_only_in_second_turn() {
        let clock = ManualClock::new();
        let mut game = controller(&clock);
        game.begin().unwrap();
        assert_eq!(game.open_hint(), Err(GameError::HintUnavailable { turn: 1 }));
    }

    #[test]
    fn test_answers_rejected_while_hint_open() {
        let clock = ManualClock::new();
        let mut game = controller(&clock);
        game.begin().unwrap();
        game.record_answer(true).unwrap();
        game.record_answer(true).unwrap();
        game.advance().unwrap();
        assert_eq!(game.turn(), 2);

        game.open_hint().unwrap();
        assert_eq!(game.record_answer(true), Err(GameError::TurnNotInPlay { turn: 2 }));
        game.close_hint();
        assert_eq!(game.phase(), TurnPhase::Playing);
        assert!(!game.hint_available());
    }
}

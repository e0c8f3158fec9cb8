//! Time source and tick scheduling
//!
//! The countdown never reads the system clock or sleeps on its own. It asks a
//! [`Clock`] for the current time and for one-shot tick reservations, and the
//! host hands each reservation back to the timer when it comes due.

pub mod manual;
pub mod tokio_clock;

use std::time::Duration;

pub use manual::ManualClock;
pub use tokio_clock::TokioClock;

/// Identifier of a scheduled one-shot tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Clock plus one-shot scheduler capability injected into a timer
pub trait Clock {
    /// Monotonic time elapsed since the clock's origin
    fn now(&self) -> Duration;

    /// Reserve a tick `delay` from now and return its handle
    fn schedule(&self, delay: Duration) -> TickHandle;

    /// Drop a reservation; unknown or already fired handles are ignored
    fn cancel(&self, handle: TickHandle);
}

/// A reservation waiting to be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PendingTick<T> {
    pub due: T,
    pub handle: TickHandle,
}

/// Earliest reservation, ties broken by scheduling order
pub(crate) fn earliest<T: Ord + Copy>(pending: &[PendingTick<T>]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|(_, tick)| (tick.due, tick.handle))
        .map(|(index, _)| index)
}

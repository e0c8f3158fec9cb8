//! Real-time clock backed by `tokio::time`

use std::{
    cell::{Cell, RefCell},
    time::Duration,
};
use tokio::time::Instant;

use super::{earliest, Clock, PendingTick, TickHandle};

/// Clock reading `tokio::time::Instant`.
///
/// Reservations are only recorded here; the turn driver sleeps until
/// [`next_deadline`](Self::next_deadline) and hands due handles back to the
/// timer. Under `tokio::time::pause` the clock follows the paused runtime.
#[derive(Debug)]
pub struct TokioClock {
    origin: Instant,
    next_id: Cell<u64>,
    pending: RefCell<Vec<PendingTick<Instant>>>,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            next_id: Cell::new(0),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Instant at which the earliest reservation falls due
    pub fn next_deadline(&self) -> Option<Instant> {
        let pending = self.pending.borrow();
        earliest(pending.as_slice()).map(|index| pending[index].due)
    }

    /// Remove and return the earliest reservation that is already due
    pub fn pop_due(&self) -> Option<TickHandle> {
        let mut pending = self.pending.borrow_mut();
        let index = earliest(pending.as_slice())?;
        if pending[index].due > Instant::now() {
            return None;
        }
        Some(pending.remove(index).handle)
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        Instant::now().duration_since(self.origin)
    }

    fn schedule(&self, delay: Duration) -> TickHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let handle = TickHandle::new(id);
        self.pending.borrow_mut().push(PendingTick {
            due: Instant::now() + delay,
            handle,
        });
        handle
    }

    fn cancel(&self, handle: TickHandle) {
        self.pending
            .borrow_mut()
            .retain(|tick| tick.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_follows_paused_runtime() {
        let clock = TokioClock::new();
        let handle = clock.schedule(Duration::from_millis(100));
        let deadline = clock.next_deadline().expect("deadline recorded");

        assert_eq!(clock.pop_due(), None);
        tokio::time::sleep_until(deadline).await;

        let now = clock.now();
        assert!(now >= Duration::from_millis(100) && now < Duration::from_millis(102));
        assert_eq!(clock.pop_due(), Some(handle));
        assert!(clock.next_deadline().is_none());
    }
}

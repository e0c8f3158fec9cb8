//! Simulated clock for deterministic tests and replays

use std::{cell::RefCell, rc::Rc, time::Duration};

use super::{earliest, Clock, PendingTick, TickHandle};

#[derive(Debug, Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTick<Duration>>,
}

/// Clock whose time only moves when told to.
///
/// Clones share the same time line, so a test can keep one handle while the
/// timer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward without delivering anything
    pub fn advance(&self, by: Duration) {
        self.inner.borrow_mut().now += by;
    }

    /// Jump to an absolute instant; moving backwards is ignored
    pub fn set(&self, at: Duration) {
        let mut inner = self.inner.borrow_mut();
        if at > inner.now {
            inner.now = at;
        }
    }

    /// Due time of the earliest outstanding reservation
    pub fn next_due(&self) -> Option<Duration> {
        let inner = self.inner.borrow();
        earliest(inner.pending.as_slice()).map(|index| inner.pending[index].due)
    }

    /// Number of outstanding reservations
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Remove and return the earliest reservation that is due at the current time
    pub fn pop_due(&self) -> Option<TickHandle> {
        let mut inner = self.inner.borrow_mut();
        let index = earliest(inner.pending.as_slice())?;
        if inner.pending[index].due > inner.now {
            return None;
        }
        Some(inner.pending.remove(index).handle)
    }

    /// Deliver every reservation falling due up to `deadline`, each exactly on
    /// time, then leave the clock at `deadline`.
    ///
    /// `deliver` may schedule new ticks; those are picked up in the same pass.
    pub fn run_until<F>(&self, deadline: Duration, mut deliver: F)
    where
        F: FnMut(TickHandle),
    {
        while let Some(due) = self.next_due().filter(|due| *due <= deadline) {
            self.set(due);
            if let Some(handle) = self.pop_due() {
                deliver(handle);
            }
        }
        self.set(deadline);
    }

    /// Same as [`run_until`](Self::run_until), relative to the current time
    pub fn run_for<F>(&self, span: Duration, deliver: F)
    where
        F: FnMut(TickHandle),
    {
        let deadline = self.now() + span;
        self.run_until(deadline, deliver);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    fn schedule(&self, delay: Duration) -> TickHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TickHandle::new(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + delay;
        inner.pending.push(PendingTick { due, handle });
        handle
    }

    fn cancel(&self, handle: TickHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|tick| tick.handle != handle);
    }
}

//! Trailing-edge debounce driven by the event loop clock

use std::time::{Duration, Instant};

/// Holds at most one pending value per stream.
///
/// Every [`push`](Debouncer::push) replaces the pending value and restarts
/// the quiet window. [`poll`](Debouncer::poll) releases the value once the
/// window has elapsed since the last push. Time is passed in by the caller,
/// so the owning loop decides when deadlines are checked.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Schedule `value`, cancelling whatever was pending
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// Take the pending value if its window has elapsed at `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// When the pending value will fire, if one is scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

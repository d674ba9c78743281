use std::time::{Duration, Instant};

/// Holds back a changing value until it has been stable for a quiet period.
///
/// Every [`push`](Self::push) replaces the pending value and restarts the
/// quiet period, so only the most recent value is ever emitted. The
/// debouncer owns a single pending slot and never schedules anything on its
/// own: the host calls [`poll`](Self::poll) at or after
/// [`deadline`](Self::deadline).
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records a new source value observed at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.quiet,
        });
    }

    /// Emits the pending value once its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|pending| pending.due <= now) {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value; nothing is emitted for it afterwards.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

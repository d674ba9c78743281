use std::time::{Duration, Instant};

/// Caps how often a changing value is propagated.
///
/// The first value goes through immediately. Values arriving while the
/// window is closed are coalesced, and the latest of them is emitted once
/// when the window reopens. At most one value is emitted per window.
#[derive(Debug, Clone, PartialEq)]
pub struct Throttler<T> {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttler<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    /// Offers a value observed at `now`; returns it if it may be emitted right away.
    pub fn push(&mut self, value: T, now: Instant) -> Option<T> {
        if self.is_open(now) {
            self.pending = None;
            self.last_emit = Some(now);
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }

    /// Emits the coalesced value once the window has reopened.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.is_none() || !self.is_open(now) {
            return None;
        }
        self.last_emit = Some(now);
        self.pending.take()
    }

    /// When the coalesced value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;
        self.last_emit.map(|last| last + self.window)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn is_open(&self, now: Instant) -> bool {
        self.last_emit
            .is_none_or(|last| now.saturating_duration_since(last) >= self.window)
    }
}

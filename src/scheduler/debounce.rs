//! Trailing-edge debounce
//!
//! Every `push` restarts the quiet period; once it elapses the most recent
//! value comes out exactly once. Time is supplied by the caller, so the
//! same logic runs under a browser timer or a manual test clock.

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window_ms: f64,
    pending: Option<(T, f64)>,
}

impl<T> Debouncer<T> {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms: window_ms.max(0.0),
            pending: None,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Record an event at `now_ms`, replacing any pending value
    pub fn push(&mut self, value: T, now_ms: f64) {
        self.pending = Some((value, now_ms + self.window_ms));
    }

    /// The pending value, if its quiet period has elapsed by `now_ms`
    pub fn take_due(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now_ms >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Time left before the pending value is due
    pub fn remaining(&self, now_ms: f64) -> Option<f64> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| (deadline - now_ms).max(0.0))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

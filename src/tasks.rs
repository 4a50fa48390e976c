//! Simulated latency with cancellation.
//!
//! The fake "AI analysis" and "request sent" delays are modelled as a payload that becomes
//! available once a deadline passes. The event loop polls pending tasks on every tick.
//! Cancelling through a [`CancelHandle`] (done when the owning screen is left) guarantees
//! the payload is never delivered.

use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

/// Shared cancellation flag for a [`SimulatedTask`]
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Rc<Cell<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// A payload delivered once, after a fixed delay, unless cancelled first
#[derive(Debug)]
pub struct SimulatedTask<T> {
    due: Instant,
    payload: Option<T>,
    handle: CancelHandle,
}

impl<T> SimulatedTask<T> {
    pub fn start(payload: T, delay: Duration, now: Instant) -> Self {
        Self { due: now + delay, payload: Some(payload), handle: CancelHandle::default() }
    }

    pub fn handle(&self) -> CancelHandle {
        self.handle.clone()
    }

    pub fn cancel(&mut self) {
        self.handle.cancel();
        self.payload = None;
    }

    /// Still waiting to deliver
    pub fn is_pending(&self) -> bool {
        self.payload.is_some() && !self.handle.is_cancelled()
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }

    /// Deliver the payload if the deadline has passed. Delivers at most once;
    /// a cancelled task never delivers.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.handle.is_cancelled() {
            self.payload = None;
            return None;
        }

        if now >= self.due { self.payload.take() } else { None }
    }

    /// Block until the deadline, then deliver. Used by the non-interactive CLI.
    pub fn wait(mut self) -> Option<T> {
        let remaining = self.remaining(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.poll(self.due)
    }
}

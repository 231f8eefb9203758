//! Debounce
//!
//! Generation counter: every trigger invalidates the ones before it, so only
//! the last trigger inside a quiet window survives its delay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Debug)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay_ms,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Register a new trigger and return its ticket.
    pub fn trigger(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Drop whatever is pending without scheduling anything new.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// True while no later trigger (or cancel) has happened.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }

    /// Trigger and wait out the delay. Returns the ticket if this trigger
    /// is still the latest one; callers re-check it with `is_current` after
    /// any further await.
    pub async fn settle(&self) -> Option<u64> {
        let ticket = self.trigger();
        TimeoutFuture::new(self.delay_ms).await;
        self.is_current(ticket).then_some(ticket)
    }
}

//! Debounce state for terminal-opened bursts
//!
//! Holds at most one pending deadline. Scheduling while a deadline is
//! pending replaces it, so a burst of events collapses into the single
//! attempt that fires after the last event's window. Callers pass `now`
//! in, which keeps tests off the wall clock.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub(crate) struct DebounceState {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceState {
    pub(crate) fn new(window: Duration) -> Self {
        DebounceState {
            window,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the deadline at `now + window`
    pub(crate) fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// When the caller should wake up next, if anything is pending
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True exactly once per elapsed deadline; clears the pending state
    pub(crate) fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

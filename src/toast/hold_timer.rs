// SPDX-License-Identifier: MPL-2.0
//! One-shot, cancellable delay between the entry and exit legs.

use std::time::{Duration, Instant};

/// A single pending deadline. Arming replaces any previous deadline, so a
/// stale timer can never fire after a newer notification or a dismissal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoldTimer {
    deadline: Option<Instant>,
}

impl HoldTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the timer to fire `delay` after `from`.
    pub fn arm(&mut self, from: Instant, delay: Duration) {
        self.deadline = Some(from + delay);
    }

    /// Cancels the pending deadline. Returns `true` if one was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the timer fires, or `None` when disarmed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Disarms the timer and returns its deadline once `now` has reached it.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

//! Reentrancy latch for reorder requests.
//!
//! Drag gestures may report the same logical move twice. After a reorder
//! moves something, further reorders are dropped until the settle window
//! elapses or the view reports the gesture settled.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ReorderLatch {
    settle: Duration,
    engaged_at: Option<Instant>,
}

impl ReorderLatch {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            engaged_at: None,
        }
    }

    /// Whether a reorder arriving at `now` must be dropped.
    ///
    /// The latch clears itself once the settle window has passed.
    pub fn is_engaged(&mut self, now: Instant) -> bool {
        match self.engaged_at {
            Some(at) if now.saturating_duration_since(at) < self.settle => true,
            Some(_) => {
                self.engaged_at = None;
                false
            }
            None => false,
        }
    }

    pub fn engage(&mut self, now: Instant) {
        self.engaged_at = Some(now);
    }

    pub fn release(&mut self) {
        self.engaged_at = None;
    }
}

use std::time::{Duration, Instant};

/// A one-shot deferred redirect. Dropping it cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectTimer {
    deadline: Instant,
}

impl RedirectTimer {
    pub fn arm(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now + delay,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

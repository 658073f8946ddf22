//! Result view reconciliation.
//!
//! Given a requested record id and the current history snapshot, decides
//! what the result view shows:
//!
//! - `Found(record)` once the id is in the history (terminal for that id);
//! - `Pending` while it is not. With a non-empty history a one-shot redirect
//!   timer is armed; with an empty history the view waits indefinitely;
//! - `NotFound` when the timer fires while still pending, together with a
//!   navigation back to the entry view.
//!
//! The timer belongs to the reconciler and is cancelled whenever the id
//! changes, the state leaves `Pending`, or the view is torn down.

mod timer;
mod watch;

use std::time::{Duration, Instant};

use crate::record::ConversionRecord;

pub use timer::RedirectTimer;
pub use watch::{watch_result, WatchOptions, WatchOutcome};

/// Delay before a missing record redirects to the entry view.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    Pending,
    Found(ConversionRecord),
    NotFound,
}

/// Where the result view sends the user when it gives up on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Entry,
}

#[derive(Debug)]
pub struct ResultReconciler {
    delay: Duration,
    id: Option<String>,
    state: ResultState,
    timer: Option<RedirectTimer>,
}

impl Default for ResultReconciler {
    fn default() -> Self {
        Self::new(DEFAULT_REDIRECT_DELAY)
    }
}

impl ResultReconciler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            id: None,
            state: ResultState::Pending,
            timer: None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &ResultState {
        &self.state
    }

    /// When the armed redirect fires, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(RedirectTimer::deadline)
    }

    /// Evaluates `id` against a history snapshot.
    ///
    /// A new id resets the machine. `Found` and `NotFound` are sticky for the
    /// current id. An already-armed timer is never re-armed, so repeated
    /// evaluations cannot postpone the redirect.
    pub fn reconcile(
        &mut self,
        id: &str,
        records: &[ConversionRecord],
        now: Instant,
    ) -> &ResultState {
        if self.id.as_deref() != Some(id) {
            self.cancel_timer();
            self.id = Some(id.to_string());
            self.state = ResultState::Pending;
        }
        if self.state != ResultState::Pending {
            return &self.state;
        }

        if let Some(record) = records.iter().find(|r| r.id == id) {
            self.cancel_timer();
            tracing::debug!("result {} found", id);
            self.state = ResultState::Found(record.clone());
        } else if records.is_empty() {
            tracing::debug!("history empty; result {} pending without redirect", id);
        } else if self.timer.is_none() {
            tracing::debug!("result {} missing; redirect in {:?}", id, self.delay);
            self.timer = Some(RedirectTimer::arm(now, self.delay));
        }
        &self.state
    }

    /// Fires the redirect timer if it is due, returning the navigation to perform.
    pub fn fire_due(&mut self, now: Instant) -> Option<Navigation> {
        if !self.timer.as_ref().is_some_and(|t| t.is_due(now)) {
            return None;
        }
        self.timer = None;
        if self.state != ResultState::Pending {
            return None;
        }
        tracing::info!(
            "result {} not found; redirecting to entry",
            self.id.as_deref().unwrap_or_default()
        );
        self.state = ResultState::NotFound;
        Some(Navigation::Entry)
    }

    /// Manual escape from the pending or not-found view.
    pub fn escape(&mut self) -> Navigation {
        self.cancel_timer();
        Navigation::Entry
    }

    /// The view is going away; drop any pending redirect.
    pub fn teardown(&mut self) {
        self.cancel_timer();
    }

    fn cancel_timer(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!("redirect timer cancelled");
        }
    }
}

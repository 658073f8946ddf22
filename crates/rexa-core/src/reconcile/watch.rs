//! Async driver for [`ResultReconciler`].
//!
//! Re-reads the history on a poll interval so a record written by another
//! process still shows up, and sleeps until whichever comes first: the next
//! poll or the redirect deadline.

use std::future::Future;
use std::time::{Duration, Instant};

use tokio::time::Instant as TokioInstant;

use super::{Navigation, ResultReconciler, ResultState, DEFAULT_REDIRECT_DELAY};
use crate::history::HistoryCache;
use crate::storage::BlobStore;

#[derive(Debug, Clone, Copy)]
pub struct WatchOptions {
    pub redirect_delay: Duration,
    pub poll_interval: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            poll_interval: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchOutcome {
    /// `Found`, `NotFound`, or `Pending` if the watch was shut down first.
    pub state: ResultState,
    /// Set when the redirect timer fired.
    pub navigation: Option<Navigation>,
}

/// Drives reconciliation for `id` until the record is found, the redirect
/// fires, or `shutdown` resolves (which tears down the pending timer).
///
/// `on_pending` runs once, the first time the view is pending, with the
/// redirect deadline if one was armed.
pub async fn watch_result<S, F, P>(
    history: &HistoryCache<S>,
    id: &str,
    opts: WatchOptions,
    shutdown: F,
    on_pending: P,
) -> WatchOutcome
where
    S: BlobStore,
    F: Future<Output = ()>,
    P: FnOnce(Option<Instant>),
{
    tokio::pin!(shutdown);
    let mut reconciler = ResultReconciler::new(opts.redirect_delay);
    let mut on_pending = Some(on_pending);

    loop {
        let now = TokioInstant::now().into_std();
        let records = history.load();
        reconciler.reconcile(id, &records, now);

        if let Some(navigation) = reconciler.fire_due(now) {
            return WatchOutcome {
                state: reconciler.state().clone(),
                navigation: Some(navigation),
            };
        }
        if *reconciler.state() != ResultState::Pending {
            return WatchOutcome {
                state: reconciler.state().clone(),
                navigation: None,
            };
        }
        if let Some(report) = on_pending.take() {
            report(reconciler.deadline());
        }

        let next_poll = now + opts.poll_interval;
        let wake = reconciler
            .deadline()
            .map_or(next_poll, |deadline| deadline.min(next_poll));

        tokio::select! {
            _ = &mut shutdown => {
                tracing::debug!("watch for {} shut down while pending", id);
                reconciler.teardown();
                return WatchOutcome {
                    state: ResultState::Pending,
                    navigation: None,
                };
            }
            _ = tokio::time::sleep_until(TokioInstant::from_std(wake)) => {}
        }
    }
}

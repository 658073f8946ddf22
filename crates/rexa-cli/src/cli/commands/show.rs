//! `rexa show <id>` – the result view for one record.

use anyhow::Result;
use rexa_core::config::RexaConfig;
use rexa_core::reconcile::{
    watch_result, Navigation, ResultReconciler, ResultState, WatchOptions, WatchOutcome,
};
use std::time::Instant;

use super::open_history;
use crate::cli::render;

/// Resolves when the user presses Ctrl-C; never resolves if the handler can't be installed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

pub async fn run_show(cfg: &RexaConfig, id: &str, wait: bool) -> Result<()> {
    let history = open_history(cfg)?;

    let outcome = if wait {
        let opts = WatchOptions {
            redirect_delay: cfg.redirect_delay(),
            poll_interval: cfg.poll_interval(),
        };
        watch_result(&history, id, opts, interrupted(), |deadline| {
            let redirect_in = deadline.map(|d| d.saturating_duration_since(Instant::now()));
            println!("{}", render::render_pending(id, redirect_in));
        })
        .await
    } else {
        let mut reconciler = ResultReconciler::new(cfg.redirect_delay());
        let state = reconciler
            .reconcile(id, &history.load(), Instant::now())
            .clone();
        WatchOutcome {
            state,
            navigation: None,
        }
    };

    match outcome.state {
        ResultState::Found(record) => println!("{}", render::render_record(&record)),
        ResultState::NotFound => {
            println!("{}", render::render_not_found());
            if outcome.navigation == Some(Navigation::Entry) {
                println!("{}", render::render_entry());
            }
        }
        ResultState::Pending if !wait => {
            println!("{}", render::render_pending(id, None));
        }
        ResultState::Pending => tracing::info!("stopped waiting for result {}", id),
    }
    Ok(())
}

//! `rexa history` – list previous conversions, newest first.

use anyhow::Result;
use rexa_core::config::RexaConfig;
use rexa_core::history::display_order;

use super::open_history;
use crate::cli::render;

pub fn run_history(cfg: &RexaConfig) -> Result<()> {
    let records = open_history(cfg)?.load();
    println!("{}", render::render_history(&display_order(&records)));
    Ok(())
}

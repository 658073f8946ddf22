//! `rexa examples` – sample patterns.

use crate::cli::render;

pub fn run_examples() {
    println!("{}", render::render_examples());
}

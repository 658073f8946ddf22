//! Plain-text views printed by the commands.

use chrono::{DateTime, Local, Utc};
use rexa_core::patterns::EXAMPLE_PATTERNS;
use rexa_core::record::ConversionRecord;
use std::fmt::Write;
use std::time::Duration;

/// Medium date, short time, in the local timezone (e.g. "Jan 5, 2024, 3:07 PM").
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%b %-d, %Y, %-I:%M %p")
        .to_string()
}

pub fn render_record(record: &ConversionRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Regular Expression: {}", record.regex);
    let _ = writeln!(out, "Converted on {}", format_date(&record.date));
    let _ = writeln!(out);
    for (title, img) in record.visualizations() {
        let _ = writeln!(out, "{:<15} {}", format!("{title}:"), img.unwrap_or("No image available."));
    }
    let links = record.download_links();
    if !links.is_empty() {
        let _ = writeln!(out);
        for (label, href) in links {
            let _ = writeln!(out, "{label}: {href}");
        }
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "Convert another regex: rexa convert <REGEX>\nView history:          rexa history\nRecord ID:             {}",
        record.id
    );
    out
}

pub fn render_pending(id: &str, redirect_in: Option<Duration>) -> String {
    match redirect_in {
        Some(left) => format!(
            "Result not found\n\
             We couldn't locate conversion {id} in your history. It may have been removed.\n\
             You will be redirected to the home page in {}s (Ctrl-C to stop waiting).",
            left.as_millis().div_ceil(1000)
        ),
        None => format!(
            "Your history is empty; waiting for result {id} to appear (Ctrl-C to stop waiting)."
        ),
    }
}

pub fn render_not_found() -> String {
    "Result not found\n\
     We couldn't locate this conversion in your history.\n\
     Go to Home: rexa convert <REGEX>"
        .to_string()
}

/// The entry view: what the user lands on after a redirect.
pub fn render_entry() -> String {
    format!(
        "Regex to Automata Converter\n\
         Visualize regular expressions as NFA, DFA, and Minimized DFA.\n\n{}",
        render_examples()
    )
}

pub fn render_examples() -> String {
    let mut out = String::from("Example Regex Patterns");
    for p in EXAMPLE_PATTERNS {
        let _ = write!(out, "\n  {:<14} {}", p.pattern, p.description);
    }
    out
}

pub fn render_history(records: &[&ConversionRecord]) -> String {
    if records.is_empty() {
        return "No history yet\n\
                Start by converting a regular expression to see your results here.\n\
                Convert a regex: rexa convert <REGEX>"
            .to_string();
    }
    let mut out = format!("{:<24} {:<38} {}", "DATE", "ID", "REGEX");
    for r in records {
        let _ = write!(out, "\n{:<24} {:<38} {}", format_date(&r.date), r.id, r.regex);
    }
    out
}

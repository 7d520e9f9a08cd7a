//! Formatting utilities used for CLI and export outputs.

use crate::models::break_entry::Break;
use crate::utils::time::nice_time;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Minutes as `HHh MMm`, e.g. `07h 50m`.
pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// One-line description of a break for terminal output.
///
/// `10 min  09:30-09:40  10 min`, `Meal  fixed  45 min`,
/// `30 min  12:00-....  running`.
pub fn describe_break(b: &Break) -> String {
    match b {
        Break::Timed {
            kind,
            start,
            end: Some(end),
        } => format!(
            "{:<7} {}-{}  {} min",
            kind.label(),
            nice_time(*start),
            nice_time(*end),
            b.minutes()
        ),
        Break::Timed {
            kind,
            start,
            end: None,
        } => format!("{:<7} {}-....  running", kind.label(), nice_time(*start)),
        Break::Fixed { kind, .. } => {
            format!("{:<7} fixed        {} min", kind.label(), b.minutes())
        }
    }
}

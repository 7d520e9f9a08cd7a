//! Time utilities: parsing HH:MM, building instants, minute arithmetic, ISO formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

fn hhmm_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}:\d{2}$").expect("static regex"))
}

/// Strict `HH:MM` (two digits each, like the time inputs of the entry form).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if !hhmm_re().is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Combine a calendar day and a wall-clock time in the local zone.
pub fn local_instant(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Utc>> {
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidTime(format!(
            "{} {} does not exist in the local time zone",
            date,
            time.format("%H:%M")
        ))),
    }
}

/// Round an instant to the nearest quarter hour (half rounds up).
/// Every real-world UTC offset is a multiple of 15 minutes, so this is also
/// a quarter hour on the local clock.
pub fn round_to_quarter_hour(dt: DateTime<Utc>) -> DateTime<Utc> {
    let secs = (dt.timestamp() + 450).div_euclid(900) * 900;
    DateTime::from_timestamp(secs, 0).unwrap_or(dt)
}

/// Milliseconds → whole minutes, rounding half up, never negative.
pub fn ms_to_minutes(ms: i64) -> i64 {
    if ms <= 0 {
        return 0;
    }
    (ms + 30_000) / 60_000
}

pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    ms_to_minutes((end - start).num_milliseconds())
}

/// ISO-8601 UTC with milliseconds, e.g. `2025-06-01T09:00:00.000Z`.
pub fn iso_millis(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Local `HH:MM` of an instant, for terminal output.
pub fn nice_time(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%H:%M").to_string()
}

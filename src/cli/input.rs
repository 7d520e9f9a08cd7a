//! Turning `--at` / `--date` / `--kind` arguments into domain values.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::break_kind::BreakKind;
use crate::utils::date::parse_date_or;
use crate::utils::time::{local_instant, parse_time, round_to_quarter_hour};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike, Utc};

/// Resolve the instant of an action.
///
/// With neither `--at` nor `--date` the current instant is used. A `--date`
/// without `--at` takes the current clock time (HH:MM) on that date. An `--at`
/// without `--date` is taken on `day`; if that lands before `not_before` it
/// moves to the next day, so `end --at 02:00` closes a shift started the
/// evening before.
pub fn resolve_instant(
    cfg: &Config,
    at: Option<&String>,
    date: Option<&String>,
    day: NaiveDate,
    not_before: Option<DateTime<Utc>>,
) -> AppResult<DateTime<Utc>> {
    let instant = match (at, date) {
        (None, None) => Utc::now(),
        (None, Some(_)) => local_instant(parse_date_or(date, day)?, clock_now())?,
        (Some(s), _) => {
            let time = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            if date.is_some() {
                local_instant(parse_date_or(date, day)?, time)?
            } else {
                let same_day = local_instant(day, time)?;
                match not_before {
                    Some(floor) if same_day < floor => {
                        let next = day
                            .succ_opt()
                            .ok_or_else(|| AppError::InvalidDate(day.to_string()))?;
                        local_instant(next, time)?
                    }
                    _ => same_day,
                }
            }
        }
    };

    if cfg.round_to_quarter_hour {
        Ok(round_to_quarter_hour(instant))
    } else {
        Ok(instant)
    }
}

/// Current local wall-clock time at minute precision.
fn clock_now() -> NaiveTime {
    let now = Local::now();
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or_else(|| now.time())
}

pub fn parse_kind(code: &str) -> AppResult<BreakKind> {
    BreakKind::from_code(code).ok_or_else(|| AppError::InvalidBreakKind(code.to_string()))
}

/// Minutes of a fixed break: explicit value, else the preset of the kind,
/// else the configured meal length. Custom breaks need an explicit value.
pub fn fixed_minutes(cfg: &Config, kind: BreakKind, minutes: Option<i64>) -> AppResult<i64> {
    if let Some(m) = minutes {
        return Ok(m);
    }
    match kind {
        BreakKind::Meal => Ok(cfg.meal_break_minutes),
        BreakKind::Custom => Err(AppError::MissingField("--minutes (required for custom breaks)")),
        other => other
            .preset_minutes()
            .ok_or(AppError::MissingField("--minutes")),
    }
}

use crate::cli::commands::{open, print_shift};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::accounting::ShiftCorrection;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;
use crate::utils::time::{local_instant, parse_optional_time};
use chrono::{Duration, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        event,
        name,
        date,
        start,
        end,
        remove_break,
    } = cmd
    {
        let mut acc = open(cfg)?;
        let id = acc.resolve_id(id)?;
        let current = acc.find(&id)?;

        let new_date = match date {
            Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };
        let day = new_date.unwrap_or(current.date);

        let new_start = match parse_optional_time(start.as_ref())? {
            Some(t) => Some(local_instant(day, t)?),
            None => None,
        };
        // a date change alone moves the shift by whole days
        let effective_start = new_start.unwrap_or_else(|| {
            current.start + Duration::days((day - current.date).num_days())
        });

        // --out is on the start's day, or the next one when earlier
        let new_end = match parse_optional_time(end.as_ref())? {
            Some(t) => {
                let start_day = effective_start.with_timezone(&Local).date_naive();
                let same_day = local_instant(start_day, t)?;
                if same_day < effective_start {
                    let next = start_day
                        .succ_opt()
                        .ok_or_else(|| AppError::InvalidDate(start_day.to_string()))?;
                    Some(local_instant(next, t)?)
                } else {
                    Some(same_day)
                }
            }
            None => None,
        };

        let fix = ShiftCorrection {
            event: event.clone(),
            name: name.clone(),
            date: new_date,
            start: new_start,
            end: new_end,
            remove_break: *remove_break,
        };

        if fix.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let shift = acc.correct(&id, fix)?;
        if let Some(n) = remove_break {
            success(format!("Removed break #{}.", n));
        }
        success("Shift updated.");

        print_shift(&shift);
    }
    Ok(())
}

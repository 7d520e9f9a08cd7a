use crate::cli::commands::open;
use crate::cli::input::resolve_instant;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::{parse_date_or, today};
use crate::utils::time::nice_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        name,
        event,
        date,
        at,
    } = cmd
    {
        let event = event
            .clone()
            .or_else(|| cfg.default_event.clone())
            .ok_or(AppError::MissingField("event (--event or default_event)"))?;

        let day = parse_date_or(date.as_ref(), today())?;
        let start = resolve_instant(cfg, at.as_ref(), date.as_ref(), day, None)?;

        let mut acc = open(cfg)?;
        let shift = acc.start_shift(&event, name, day, start)?;

        success(format!(
            "Shift started for {} at {} ({}, {})",
            shift.name,
            nice_time(shift.start),
            shift.event,
            shift.date_str()
        ));
        println!("🆔 {}", shift.id);
    }
    Ok(())
}

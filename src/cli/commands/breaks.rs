//! `break-start`, `break-end` and `break-add`.

use crate::cli::commands::open;
use crate::cli::input::{fixed_minutes, parse_kind, resolve_instant};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::nice_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::BreakStart { id, kind, at, date } => {
            let kind = parse_kind(kind)?;
            let mut acc = open(cfg)?;
            let id = acc.resolve_id(id)?;
            let shift = acc.find(&id)?;

            let when = resolve_instant(
                cfg,
                at.as_ref(),
                date.as_ref(),
                shift.date,
                Some(shift.start),
            )?;
            acc.start_break(&id, kind, when)?;

            success(format!("{} break started at {}", kind, nice_time(when)));
        }

        Commands::BreakEnd { id, at, date } => {
            let mut acc = open(cfg)?;
            let id = acc.resolve_id(id)?;
            let shift = acc.find(&id)?;
            let floor = shift.running_break().and_then(|b| b.start());

            let when = resolve_instant(cfg, at.as_ref(), date.as_ref(), shift.date, floor)?;
            let ended = acc.end_break(&id, when)?;

            success(format!(
                "{} break ended at {} ({} min)",
                ended.kind(),
                nice_time(when),
                ended.minutes()
            ));
        }

        Commands::BreakAdd { id, kind, minutes } => {
            let kind = parse_kind(kind)?;
            let minutes = fixed_minutes(cfg, kind, *minutes)?;

            let mut acc = open(cfg)?;
            let id = acc.resolve_id(id)?;
            let added = acc.add_fixed_break(&id, kind, minutes)?;

            success(format!("{} break recorded ({} min)", kind, added.minutes()));
        }

        _ => {}
    }
    Ok(())
}

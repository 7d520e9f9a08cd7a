use crate::cli::commands::{open, print_shift};
use crate::cli::input::resolve_instant;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::signature::Signature;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use crate::utils::time::{duration_minutes, nice_time};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::End {
        id,
        at,
        date,
        signature,
        yes,
    } = cmd
    {
        let mut acc = open(cfg)?;
        let id = acc.resolve_id(id)?;
        let shift = acc.resume(&id)?;

        let end = resolve_instant(
            cfg,
            at.as_ref(),
            date.as_ref(),
            shift.date,
            Some(shift.start),
        )?;

        let signature = match signature {
            Some(file) => {
                let bytes = fs::read(expand_tilde(file))?;
                let sig = Signature::from_capture(bytes);
                if sig.is_none() {
                    warning("Signature file is empty; the shift will be stored unsigned.");
                }
                sig
            }
            None => None,
        };

        if !*yes
            && !confirm(&format!(
                "End shift of {} at {} ({} min on the clock)?",
                shift.name,
                nice_time(end),
                duration_minutes(shift.start, end)
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let ended = acc.end_shift(&id, end, signature)?;
        success(format!("Shift of {} ended.", ended.name));
        print_shift(&ended);
    }
    Ok(())
}

use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut acc = open(cfg)?;
        let id = acc.resolve_id(id)?;
        let shift = acc.find(&id)?;

        if !*yes
            && !confirm(&format!(
                "Delete the shift of {} at {} on {}? This action is irreversible.",
                shift.name,
                shift.event,
                shift.date_str()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = acc.delete_shift(&id)?;
        success(format!("Shift {} has been deleted.", removed.id));
    }

    Ok(())
}

use crate::cli::commands::{open, print_shift};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;
use crate::utils::time::nice_time;

/// Without an id, list every active shift; with one, show it in full.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Resume { id } = cmd {
        let acc = open(cfg)?;

        if let Some(id) = id {
            let id = acc.resolve_id(id)?;
            let shift = acc.resume(&id)?;
            print_shift(&shift);
            return Ok(());
        }

        let active = acc.active_shifts()?;
        if active.is_empty() {
            info("No active shifts.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "Event", "Name", "Date", "Start", "Breaks", "State"]);
        for s in &active {
            table.add_row(vec![
                s.id.clone(),
                s.event.clone(),
                s.name.clone(),
                s.date_str(),
                nice_time(s.start),
                s.breaks.len().to_string(),
                if s.running_break().is_some() {
                    "on break".to_string()
                } else {
                    "working".to_string()
                },
            ]);
        }
        print!("{}", table.render(&cfg.separator_char));
    }
    Ok(())
}

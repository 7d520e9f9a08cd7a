use crate::cli::commands::{open, print_shift};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::totals::totals;
use crate::core::filter::ShiftFilter;
use crate::errors::AppResult;
use crate::export::range::parse_optional_range;
use crate::ui::messages::info;
use crate::utils::mins2readable;
use crate::utils::table::Table;
use crate::utils::time::nice_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        event,
        period,
        details,
    } = cmd
    {
        let bounds = parse_optional_range(period.as_ref())?;
        let filter = ShiftFilter::new(event.as_deref(), bounds);

        let acc = open(cfg)?;
        let shifts = acc.history(&filter)?;

        if shifts.is_empty() {
            info("No completed shifts for the selected filter.");
            return Ok(());
        }

        if *details {
            for s in &shifts {
                print_shift(s);
                println!();
            }
            return Ok(());
        }

        let mut table = Table::new(&[
            "ID", "Date", "Event", "Name", "Start", "End", "Total", "Breaks", "Worked",
        ]);
        let mut worked_sum = 0;

        for s in &shifts {
            let t = totals(s);
            let worked = t.worked.unwrap_or(0);
            worked_sum += worked;

            table.add_row(vec![
                s.id.clone(),
                s.date_str(),
                s.event.clone(),
                s.name.clone(),
                nice_time(s.start),
                s.end.map(nice_time).unwrap_or_default(),
                t.total.unwrap_or(0).to_string(),
                t.breaks.to_string(),
                worked.to_string(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
        println!(
            "\n{} shift(s), worked {}",
            shifts.len(),
            mins2readable(worked_sum)
        );
    }
    Ok(())
}

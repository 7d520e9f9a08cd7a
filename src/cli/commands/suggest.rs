use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Print remembered staff and event names (both unless one is selected).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Suggest { names, events } = cmd {
        let acc = open(cfg)?;
        let both = !*names && !*events;

        if *names || both {
            print_list("Staff names", &acc.known_names()?);
        }
        if *events || both {
            print_list("Events", &acc.known_events()?);
        }
    }
    Ok(())
}

fn print_list(title: &str, values: &[String]) {
    header(title);
    if values.is_empty() {
        info("(none yet)");
    }
    for v in values {
        println!("  {}", v);
    }
}

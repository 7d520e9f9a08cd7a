use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        event,
        range,
        force,
    } = cmd
    {
        let mut acc = open(cfg)?;
        ExportLogic::export(
            &mut acc,
            *format,
            file.as_ref(),
            event.as_ref(),
            range.as_ref(),
            *force,
        )?;
    }
    Ok(())
}

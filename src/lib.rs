//! shiftsheet library root.
//! Exposes the CLI parser, the high-level run() function and the shift
//! accounting core with its storage backends.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Start { .. } => c::start::handle(&cli.command, cfg),
        Commands::BreakStart { .. } | Commands::BreakEnd { .. } | Commands::BreakAdd { .. } => {
            c::breaks::handle(&cli.command, cfg)
        }
        Commands::End { .. } => c::end::handle(&cli.command, cfg),
        Commands::Resume { .. } => c::resume::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Edit { .. } => c::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::Suggest { .. } => c::suggest::handle(&cli.command, cfg),
        Commands::Backup { .. } => c::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(Some(custom_db.as_str()))
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}

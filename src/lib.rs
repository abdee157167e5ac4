//! plantlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod remote;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::List => commands::list::handle(cfg),
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg),
        Commands::Water { .. } => commands::water::handle(&cli.command, cfg),
        Commands::Note { .. } => commands::note::handle(&cli.command, cfg),
        Commands::Logs { .. } => commands::logs::handle(&cli.command, cfg),
        Commands::EditLog { .. } => commands::edit_log::handle(&cli.command, cfg),
        Commands::Stats { .. } => commands::stats::handle(&cli.command, cfg),
        Commands::Reminder { .. } => commands::reminder::handle(&cli.command, cfg),
        Commands::Reminders { .. } => commands::reminders::handle(&cli.command, cfg),
        Commands::Weather(sub) => commands::weather::handle(sub, cfg),
        Commands::Expense(sub) => commands::expense::handle(sub, cfg),
        Commands::Photo(sub) => commands::photo::handle(sub, cfg),
        Commands::Ask { .. } => commands::ask::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; `--db` wins over the configured database
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .into_owned();
    }

    dispatch(&cli, &cfg)
}

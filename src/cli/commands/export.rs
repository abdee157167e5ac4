use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        plant,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let written = ExportLogic::export(&pool, *format, file, *plant, *force, Local::now())?;

        if written > 0 {
            log::audit_quiet(
                &pool.conn,
                "export",
                file,
                &format!("{} record(s) as {}", written, format.as_str()),
            );
        }
    }
    Ok(())
}

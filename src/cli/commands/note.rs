use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::care_log::{CareLogLogic, LogInput};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Local;

/// Add a generic journal entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note {
        id,
        height,
        watered,
        fertilizer,
        dose,
        note,
        status,
        date: date_arg,
    } = cmd
    {
        let input = LogInput {
            logged_at: date_arg.as_deref().map(date::parse_datetime_arg).transpose()?,
            watered: Some(*watered),
            height_cm: *height,
            note: note.clone(),
            fertilizer_type: fertilizer.clone(),
            fertilizer_dose: dose.clone(),
            status: status.clone(),
        };

        let pool = open_db(&cfg.database)?;
        let log = CareLogLogic::add(&pool, *id, &input, Local::now())?;

        success(format!(
            "Entry #{} added ({}) on {}.",
            log.id,
            log.status.label(),
            log.datetime_str()
        ));
    }

    Ok(())
}

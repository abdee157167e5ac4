use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::care_log::{CareLogLogic, LogInput};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::EditLog {
        log_id,
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
            watered: *watered,
            height_cm: *height,
            note: note.clone(),
            fertilizer_type: fertilizer.clone(),
            fertilizer_dose: dose.clone(),
            status: status.clone(),
        };

        let pool = open_db(&cfg.database)?;
        let log = CareLogLogic::edit(&pool, *log_id, &input)?;

        success(format!("Entry #{} updated ({}).", log.id, log.status.label()));
    }

    Ok(())
}

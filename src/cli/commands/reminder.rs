use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminder::ReminderLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminder { id, on, off, every } = cmd {
        let pool = open_db(&cfg.database)?;

        if *on {
            let due = ReminderLogic::enable(&pool, *id, *every, Local::now())?;
            success(format!(
                "Reminder on for plant #{}: next one {}.",
                id,
                due.format("%Y-%m-%d %H:%M")
            ));
        } else if *off {
            ReminderLogic::disable(&pool, *id)?;
            success(format!("Reminder off for plant #{}.", id));
        }
    }

    Ok(())
}

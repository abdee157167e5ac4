use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminder::ReminderLogic;
use crate::db::initialize::open_db;
use crate::db::store::ReminderQueue;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{RED, RESET};
use crate::utils::table::Table;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminders { run } = cmd {
        let pool = open_db(&cfg.database)?;
        let now = Local::now();

        if *run {
            let delivered = ReminderLogic::run_due(&pool, now, |r| {
                warning(format!("💧 Time to water '{}' (plant #{})", r.plant_name, r.plant_id));
            })?;
            if delivered.is_empty() {
                info("No reminders due.");
            }
            return Ok(());
        }

        let pending = pool.pending()?;
        if pending.is_empty() {
            info("No pending reminders.");
            return Ok(());
        }

        let mut table = Table::new(&["Plant", "Name", "Due"]);
        for r in &pending {
            let due = r.due_at.format("%Y-%m-%d %H:%M").to_string();
            table.add_row(vec![
                r.plant_id.to_string(),
                r.plant_name.clone(),
                if r.is_due(now) {
                    format!("{RED}{due} (due){RESET}")
                } else {
                    due
                },
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}

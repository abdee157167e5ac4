use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::care_log::CareLogLogic;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::bold;
use crate::utils::{describe_health, format_days_ago};
use chrono::Local;

const RECENT_LOGS: usize = 5;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let pool = open_db(&cfg.database)?;
        let now = Local::now();
        let plant = PlantLogic::get(&pool, *id)?;
        let summary = PlantLogic::status_of(&pool, &plant, now)?;

        header(format!("#{} {}", plant.id, plant.name));
        println!("{:<14} {}", bold("Type:"), plant.kind);
        println!("{:<14} {}", bold("Planted:"), plant.planted_str());
        println!("{:<14} every {} days", bold("Watering:"), plant.watering_interval);
        println!(
            "{:<14} {} ({})",
            bold("Last watered:"),
            plant.last_watered_str(),
            format_days_ago(summary.days_since_watered)
        );
        println!("{:<14} {}", bold("Health:"), describe_health(summary.health));
        let reminder = match (plant.reminder_active, plant.reminder_every_minutes) {
            (false, _) => "off".to_string(),
            (true, Some(m)) => format!("on (every {m} min)"),
            (true, None) => "on".to_string(),
        };
        println!("{:<14} {}", bold("Reminder:"), reminder);
        if !plant.notes.trim().is_empty() {
            println!("{:<14} {}", bold("Notes:"), plant.notes);
        }

        let logs = CareLogLogic::list(&pool, plant.id)?;
        if !logs.is_empty() {
            println!("\n{}", bold("Latest entries:"));
            for log in logs.iter().rev().take(RECENT_LOGS) {
                println!("  {}  {}", log.datetime_str(), super::logs::describe_log(log));
            }
        }
    }

    Ok(())
}

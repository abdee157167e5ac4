use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::Local;

/// Register a new plant.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        kind,
        planted,
        interval,
        notes,
    } = cmd
    {
        let planted_at = match planted {
            Some(s) => date::parse_datetime_arg(s)?,
            None => Local::now(),
        };
        let interval = interval.unwrap_or(i64::from(cfg.default_watering_interval));

        let pool = open_db(&cfg.database)?;
        let plant = PlantLogic::add(&pool, name, kind, planted_at, interval, notes)?;

        success(format!(
            "Plant #{} '{}' added (water every {} days).",
            plant.id, plant.name, plant.watering_interval
        ));
    }

    Ok(())
}

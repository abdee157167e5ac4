use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Water { id, note } = cmd {
        let pool = open_db(&cfg.database)?;
        let (plant, next) = PlantLogic::water(&pool, *id, note.clone(), Local::now())?;

        success(format!("'{}' watered 💧", plant.name));
        if let Some(due) = next {
            info(format!("Next reminder: {}", due.format("%Y-%m-%d %H:%M")));
        }
    }

    Ok(())
}

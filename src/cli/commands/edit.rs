use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plant::{PlantEdit, PlantLogic};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        kind,
        planted,
        interval,
        notes,
    } = cmd
    {
        let edit = PlantEdit {
            name: name.clone(),
            kind: kind.clone(),
            planted_at: planted.as_deref().map(date::parse_datetime_arg).transpose()?,
            watering_interval: *interval,
            notes: notes.clone(),
        };

        if edit.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let pool = open_db(&cfg.database)?;
        let plant = PlantLogic::edit(&pool, *id, &edit, Local::now())?;

        success(format!("Plant #{} '{}' updated.", plant.id, plant.name));
    }

    Ok(())
}

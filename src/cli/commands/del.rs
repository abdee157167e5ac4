use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::confirm;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = open_db(&cfg.database)?;
        let plant = PlantLogic::get(&pool, *id)?;

        if !*yes {
            warning(format!(
                "Delete plant #{} '{}'? Its journal stays in the database.",
                plant.id, plant.name
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        PlantLogic::delete(&pool, plant.id)?;
        success(format!("Plant #{} '{}' has been deleted.", plant.id, plant.name));
    }

    Ok(())
}

use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;
use crate::utils::{describe_health, format_days_ago};
use chrono::Local;

/// All plants, newest planting first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;
    let mut rows = PlantLogic::all_with_status(&pool, Local::now())?;

    if rows.is_empty() {
        info("No plants yet. Add one with `plantlog add --name <NAME> --type <TYPE>`.");
        return Ok(());
    }

    rows.sort_by(|(a, _), (b, _)| b.planted_at.cmp(&a.planted_at).then(b.id.cmp(&a.id)));

    let mut table = Table::new(&["ID", "Name", "Type", "Planted", "Every", "Watered", "Health"]);
    for (plant, summary) in &rows {
        table.add_row(vec![
            plant.id.to_string(),
            plant.name.clone(),
            colorize_optional(&plant.kind),
            plant.planted_str(),
            format!("{}d", plant.watering_interval),
            format_days_ago(summary.days_since_watered),
            describe_health(summary.health),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}

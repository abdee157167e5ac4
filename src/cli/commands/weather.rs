use crate::cli::parser::WeatherCommands;
use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::core::weather::WeatherLogic;
use crate::db::initialize::open_db;
use crate::db::store::{PlantStore, WeatherStore};
use crate::errors::{AppError, AppResult};
use crate::models::plant::Plant;
use crate::remote::weather_api;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_should_water;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use std::collections::HashMap;
use std::fs;

pub fn handle(cmd: &WeatherCommands, cfg: &Config) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;

    match cmd {
        WeatherCommands::Check { plant, from_file } => {
            let plants = match plant {
                Some(id) => vec![PlantLogic::get(&pool, *id)?],
                None => pool.plants()?,
            };
            if plants.is_empty() {
                info("No plants to check.");
                return Ok(());
            }

            let forecast = match from_file {
                Some(path) => weather_api::parse_forecast(&fs::read_to_string(expand_tilde(path))?)?,
                None => weather_api::fetch_forecast(&cfg.weather)?,
            };
            if forecast.is_empty() {
                return Err(AppError::Weather("forecast contains no days".into()));
            }

            let report = WeatherLogic::apply_forecast(&pool, &plants, &forecast, &cfg.weather)?;

            if let Some(alert) = &report.alert {
                warning(alert.message());
            }
            if !report.water_today.is_empty() {
                info(format!(
                    "Good day to water: {} 💧",
                    report.water_today.join(", ")
                ));
            }
            success(format!(
                "{} decision(s) stored, {} already planned.",
                report.written.len(),
                report.kept_existing
            ));
        }

        WeatherCommands::History { plant } => {
            let decisions = match plant {
                Some(id) => {
                    PlantLogic::get(&pool, *id)?;
                    pool.decisions_for_plant(*id)?
                }
                None => pool.all_decisions()?,
            };
            if decisions.is_empty() {
                info("No weather decisions stored.");
                return Ok(());
            }

            let names = plant_names(&pool.plants()?);
            let mut sorted = decisions;
            sorted.sort_by(|a, b| b.date.cmp(&a.date).then(a.plant_id.cmp(&b.plant_id)));

            let mut table = Table::new(&["Date", "Plant", "Advice", "Condition"]);
            for d in &sorted {
                table.add_row(vec![
                    d.date_str(),
                    plant_label(&names, d.plant_id),
                    colorize_should_water(d.should_water),
                    d.condition.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        WeatherCommands::Today => {
            let decisions = pool.decisions_for_date(&date::today())?;
            if decisions.is_empty() {
                info("No decision for today. Run `plantlog weather check`.");
                return Ok(());
            }

            let names = plant_names(&pool.plants()?);
            let mut table = Table::new(&["Plant", "Advice", "Condition"]);
            for d in &decisions {
                table.add_row(vec![
                    plant_label(&names, d.plant_id),
                    colorize_should_water(d.should_water),
                    d.condition.clone(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}

fn plant_names(plants: &[Plant]) -> HashMap<i64, String> {
    plants.iter().map(|p| (p.id, p.name.clone())).collect()
}

/// Decisions outlive deleted plants.
fn plant_label(names: &HashMap<i64, String>, id: i64) -> String {
    match names.get(&id) {
        Some(name) => format!("#{id} {name}"),
        None => format!("#{id} (deleted)"),
    }
}

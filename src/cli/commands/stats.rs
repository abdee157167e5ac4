use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::chart::render_growth_chart;
use crate::utils::formatting::{bold, format_growth_delta, format_height};
use crate::utils::{describe_health, format_days_ago};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { id, chart } = cmd {
        let pool = open_db(&cfg.database)?;
        let s = PlantLogic::status(&pool, *id, Local::now())?;

        header(format!("Stats for '{}'", s.plant_name));

        println!("{} {} days", bold("Age:"), s.days_since_planting);
        println!("{} {}", bold("Health:"), describe_health(s.health));
        println!();

        println!("{}", bold("Growth"));
        println!("  measurements : {}", s.total_growth_logs);
        println!("  current      : {}", format_height(s.current_height_cm));
        println!(
            "  last change  : {}",
            format_growth_delta(s.current_height_cm, s.previous_height_cm)
        );
        println!();

        println!("{}", bold("Watering"));
        println!("  waterings    : {}", s.total_waterings);
        println!("  last watered : {}", format_days_ago(s.days_since_watered));
        println!("  interval     : every {} days", s.watering_interval);
        println!();

        println!("{}", bold("Weather"));
        println!("  rainy days   : {}", s.rain_detected);
        println!("  skipped      : {}", s.watering_avoided);

        if *chart {
            println!();
            print!("{}", render_growth_chart(&s.growth_history));
        }
    }

    Ok(())
}

use crate::core::calculator::{days, growth, health, rain, watering};
use crate::models::care_log::CareLog;
use crate::models::plant::Plant;
use crate::models::status::StatusSummary;
use crate::models::weather::WeatherDecision;
use chrono::{DateTime, Local};

pub struct Core;

impl Core {
    /// Derive the status summary of one plant from its stored records.
    ///
    /// Pure: no I/O, no state between calls, deterministic for a fixed `now`.
    /// `logs` and `weather_history` may be empty and in any order.
    pub fn evaluate(
        plant: &Plant,
        logs: &[CareLog],
        weather_history: &[WeatherDecision],
        now: DateTime<Local>,
    ) -> StatusSummary {
        let days_since_planting = days::days_between(plant.planted_at, now);
        let days_since_watered = watering::days_since_watered(plant, logs, now);
        let growth = growth::analyze_growth(logs);
        let rain = rain::analyze_rain(weather_history);
        let health = health::classify(days_since_watered, plant.watering_interval);

        StatusSummary {
            plant_id: plant.id,
            plant_name: plant.name.clone(),
            days_since_planting,
            total_growth_logs: growth.history.len(),
            current_height_cm: growth.current_height_cm,
            previous_height_cm: growth.previous_height_cm,
            growth_history: growth.history,
            total_waterings: watering::count_waterings(logs),
            days_since_watered,
            watering_interval: plant.watering_interval,
            rain_detected: rain.rain_detected,
            watering_avoided: rain.watering_avoided,
            health,
        }
    }
}

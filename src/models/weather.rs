use chrono::NaiveDate;
use serde::Serialize;

/// One day's watering recommendation for a plant.
/// At most one row exists per (plant_id, date).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherDecision {
    pub id: i64,
    pub plant_id: i64,
    pub date: NaiveDate, // ⇔ weather_decisions.date (TEXT "YYYY-MM-DD")
    pub should_water: bool,
    pub condition: String,
}

impl WeatherDecision {
    pub fn new(plant_id: i64, date: NaiveDate, should_water: bool, condition: &str) -> Self {
        Self {
            id: 0,
            plant_id,
            date,
            should_water,
            condition: condition.to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// One forecast day as returned by the weather provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: String,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
}

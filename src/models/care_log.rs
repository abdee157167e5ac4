use super::log_status::LogStatus;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CareLog {
    pub id: i64,
    pub plant_id: i64,
    pub logged_at: DateTime<Local>, // ⇔ care_logs.logged_at (TEXT, RFC3339)
    pub watered: bool,
    pub height_cm: f64, // 0 = not measured
    pub note: Option<String>,
    pub fertilizer_type: Option<String>,
    pub fertilizer_dose: Option<String>,
    pub status: LogStatus,
}

impl CareLog {
    /// Watering entry recorded by `water`.
    pub fn watering(plant_id: i64, at: DateTime<Local>, note: Option<String>) -> Self {
        Self {
            id: 0,
            plant_id,
            logged_at: at,
            watered: true,
            height_cm: 0.0,
            note,
            fertilizer_type: None,
            fertilizer_dose: None,
            status: LogStatus::Watering,
        }
    }

    pub fn is_growth(&self) -> bool {
        self.height_cm > 0.0
    }

    pub fn date_str(&self) -> String {
        self.logged_at.format("%Y-%m-%d").to_string()
    }

    pub fn datetime_str(&self) -> String {
        self.logged_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

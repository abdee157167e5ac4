use chrono::{DateTime, Local};
use serde::Serialize;

/// Categorical plant health derived from the days elapsed since the last
/// watering relative to the watering interval.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    NoData,
    Healthy,
    Attention,
    Critical,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::NoData => "no data",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Attention => "attention",
            HealthStatus::Critical => "critical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            HealthStatus::NoData => "🌱",
            HealthStatus::Healthy => "🌿",
            HealthStatus::Attention => "⚠️",
            HealthStatus::Critical => "🚨",
        }
    }
}

/// One point of the growth history (used by the chart).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GrowthPoint {
    pub at: DateTime<Local>,
    pub height_cm: f64,
}

/// Transient summary recomputed on demand for one plant.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub plant_id: i64,
    pub plant_name: String,
    pub days_since_planting: i64,

    // growth
    pub total_growth_logs: usize,
    pub current_height_cm: f64,
    pub previous_height_cm: Option<f64>,
    pub growth_history: Vec<GrowthPoint>,

    // watering
    pub total_waterings: usize,
    pub days_since_watered: Option<i64>, // None = never
    pub watering_interval: u32,

    // weather
    pub rain_detected: usize,
    pub watering_avoided: usize,

    pub health: HealthStatus,
}

// src/export/model.rs

use crate::models::care_log::CareLog;
use crate::models::plant::Plant;
use crate::models::status::StatusSummary;
use serde::Serialize;

/// Flat journal row, one per care log (CSV).
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub log_id: i64,
    pub plant_id: i64,
    pub plant_name: String,
    pub logged_at: String,
    pub status: String,
    pub watered: bool,
    pub height_cm: Option<f64>,
    pub fertilizer_type: Option<String>,
    pub fertilizer_dose: Option<String>,
    pub note: Option<String>,
}

impl LogExport {
    pub fn from_log(plant_name: &str, log: &CareLog) -> Self {
        Self {
            log_id: log.id,
            plant_id: log.plant_id,
            plant_name: plant_name.to_string(),
            logged_at: log.logged_at.to_rfc3339(),
            status: log.status.to_db_str().to_string(),
            watered: log.watered,
            height_cm: log.is_growth().then_some(log.height_cm),
            fertilizer_type: log.fertilizer_type.clone(),
            fertilizer_dose: log.fertilizer_dose.clone(),
            note: log.note.clone(),
        }
    }
}

/// A plant with its summary and full journal (JSON).
#[derive(Serialize, Clone, Debug)]
pub struct PlantExport {
    pub plant: Plant,
    pub summary: StatusSummary,
    pub logs: Vec<CareLog>,
}

impl PlantExport {
    pub fn rows(&self) -> impl Iterator<Item = LogExport> + '_ {
        self.logs
            .iter()
            .map(|l| LogExport::from_log(&self.plant.name, l))
    }
}

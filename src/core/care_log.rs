use crate::core::reminder::ReminderLogic;
use crate::db::store::{AuditLog, PlantStore, ReminderQueue};
use crate::errors::{AppError, AppResult};
use crate::models::care_log::CareLog;
use crate::models::log_status::LogStatus;
use chrono::{DateTime, Local};

/// Fields of a journal entry as entered by the user. `None` = not given.
#[derive(Debug, Default, Clone)]
pub struct LogInput {
    pub logged_at: Option<DateTime<Local>>,
    pub watered: Option<bool>,
    pub height_cm: Option<f64>,
    pub note: Option<String>,
    pub fertilizer_type: Option<String>,
    pub fertilizer_dose: Option<String>,
    pub status: Option<String>,
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_status(code: &str) -> AppResult<LogStatus> {
    LogStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.to_string()))
}

fn check_height(h: f64) -> AppResult<f64> {
    if !h.is_finite() || h < 0.0 {
        return Err(AppError::InvalidHeight(h));
    }
    Ok(h)
}

pub struct CareLogLogic;

impl CareLogLogic {
    /// Add a journal entry.
    ///
    /// A watered entry newer than the plant's `last_watered` also advances it
    /// (and reschedules the reminder), exactly like `water`.
    pub fn add<S>(
        store: &S,
        plant_id: i64,
        input: &LogInput,
        now: DateTime<Local>,
    ) -> AppResult<CareLog>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        let mut plant = store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let watered = input.watered.unwrap_or(false);
        let height_cm = check_height(input.height_cm.unwrap_or(0.0))?;
        let fertilizer_type = non_empty(&input.fertilizer_type);

        let status = match &input.status {
            Some(code) => parse_status(code)?,
            None => LogStatus::infer(watered, height_cm, fertilizer_type.as_deref()),
        };

        let mut log = CareLog {
            id: 0,
            plant_id,
            logged_at: input.logged_at.unwrap_or(now),
            watered,
            height_cm,
            note: non_empty(&input.note),
            fertilizer_type,
            fertilizer_dose: non_empty(&input.fertilizer_dose),
            status,
        };

        let advances = watered && plant.last_watered.is_none_or(|ts| log.logged_at > ts);

        if advances {
            let planned = ReminderLogic::plan(&plant, now)?;
            log.id = store.record_watering(&log)?;
            plant.last_watered = Some(log.logged_at);
            ReminderLogic::apply_plan(store, plant.id, planned)?;
        } else {
            log.id = store.insert_log(&log)?;
        }

        store.audit(
            "log",
            &plant_id.to_string(),
            &format!("{} entry for '{}'", log.status.label(), plant.name),
        );
        Ok(log)
    }

    /// Explicit edit of one entry: only the given fields change.
    pub fn edit<S>(store: &S, log_id: i64, input: &LogInput) -> AppResult<CareLog>
    where
        S: PlantStore + AuditLog,
    {
        let mut log = store.log(log_id)?.ok_or(AppError::LogNotFound(log_id))?;

        if let Some(at) = input.logged_at {
            log.logged_at = at;
        }
        if let Some(w) = input.watered {
            log.watered = w;
        }
        if let Some(h) = input.height_cm {
            log.height_cm = check_height(h)?;
        }
        if input.note.is_some() {
            log.note = non_empty(&input.note);
        }
        if input.fertilizer_type.is_some() {
            log.fertilizer_type = non_empty(&input.fertilizer_type);
        }
        if input.fertilizer_dose.is_some() {
            log.fertilizer_dose = non_empty(&input.fertilizer_dose);
        }
        if let Some(code) = &input.status {
            log.status = parse_status(code)?;
        }

        store.update_log(&log)?;
        store.audit("edit_log", &log.id.to_string(), "Edited journal entry");
        Ok(log)
    }

    /// Journal of a plant, oldest first.
    pub fn list<S: PlantStore>(store: &S, plant_id: i64) -> AppResult<Vec<CareLog>> {
        store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        let mut logs = store.logs_for_plant(plant_id)?;
        logs.sort_by_key(|l| (l.logged_at, l.id));
        Ok(logs)
    }
}

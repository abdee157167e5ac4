use crate::core::logic::Core;
use crate::core::reminder::ReminderLogic;
use crate::db::store::{AuditLog, PlantStore, ReminderQueue, WeatherStore};
use crate::errors::{AppError, AppResult};
use crate::models::care_log::CareLog;
use crate::models::plant::Plant;
use crate::models::status::StatusSummary;
use chrono::{DateTime, Local};

/// Optional field changes for `edit`.
#[derive(Debug, Default, Clone)]
pub struct PlantEdit {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub planted_at: Option<DateTime<Local>>,
    pub watering_interval: Option<i64>,
    pub notes: Option<String>,
}

impl PlantEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.kind.is_none()
            && self.planted_at.is_none()
            && self.watering_interval.is_none()
            && self.notes.is_none()
    }
}

/// High-level business logic for plants.
pub struct PlantLogic;

impl PlantLogic {
    /// Watering interval must be at least one day.
    pub fn validate_interval(days: i64) -> AppResult<u32> {
        if days < 1 {
            return Err(AppError::InvalidInterval(days));
        }
        u32::try_from(days).map_err(|_| AppError::InvalidInterval(days))
    }

    pub fn get<S: PlantStore>(store: &S, id: i64) -> AppResult<Plant> {
        store.plant(id)?.ok_or(AppError::PlantNotFound(id))
    }

    pub fn add<S>(
        store: &S,
        name: &str,
        kind: &str,
        planted_at: DateTime<Local>,
        watering_interval: i64,
        notes: &str,
    ) -> AppResult<Plant>
    where
        S: PlantStore + AuditLog,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("plant name cannot be empty".into()));
        }
        let interval = Self::validate_interval(watering_interval)?;

        let mut plant = Plant::new(name, kind.trim(), planted_at, interval, notes);
        plant.id = store.insert_plant(&plant)?;

        store.audit(
            "add",
            &plant.id.to_string(),
            &format!("Added plant '{}' (every {} days)", plant.name, interval),
        );

        Ok(plant)
    }

    pub fn edit<S>(store: &S, id: i64, edit: &PlantEdit, now: DateTime<Local>) -> AppResult<Plant>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        let mut plant = Self::get(store, id)?;

        if let Some(name) = &edit.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::InvalidInput("plant name cannot be empty".into()));
            }
            plant.name = name.to_string();
        }
        if let Some(kind) = &edit.kind {
            plant.kind = kind.trim().to_string();
        }
        if let Some(planted) = edit.planted_at {
            plant.planted_at = planted;
        }
        if let Some(notes) = &edit.notes {
            plant.notes = notes.clone();
        }

        let interval_changed = match edit.watering_interval {
            Some(days) => {
                let interval = Self::validate_interval(days)?;
                let changed = interval != plant.watering_interval;
                plant.watering_interval = interval;
                changed
            }
            None => false,
        };

        // A new interval moves the pending reminder, unless a custom delay rules it.
        let planned = if interval_changed && plant.reminder_every_minutes.is_none() {
            ReminderLogic::plan(&plant, now)?
        } else {
            None
        };

        store.update_plant(&plant)?;
        ReminderLogic::apply_plan(store, plant.id, planned)?;

        store.audit("edit", &plant.id.to_string(), &format!("Edited plant '{}'", plant.name));
        Ok(plant)
    }

    /// Delete a plant and cancel its pending reminder.
    /// Journal, expenses, photos and weather history stay in the store.
    pub fn delete<S>(store: &S, id: i64) -> AppResult<Plant>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        let plant = Self::get(store, id)?;

        store.cancel(plant.id)?;
        store.delete_plant(plant.id)?;

        store.audit("del", &plant.id.to_string(), &format!("Deleted plant '{}'", plant.name));
        Ok(plant)
    }

    /// Record a watering now: journal entry, `last_watered`, next reminder.
    pub fn water<S>(
        store: &S,
        id: i64,
        note: Option<String>,
        now: DateTime<Local>,
    ) -> AppResult<(Plant, Option<DateTime<Local>>)>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        let mut plant = Self::get(store, id)?;
        let planned = ReminderLogic::plan(&plant, now)?;

        let log = CareLog::watering(plant.id, now, note);
        store.record_watering(&log)?;
        plant.last_watered = Some(now);

        let next = ReminderLogic::apply_plan(store, plant.id, planned)?;

        store.audit("water", &plant.id.to_string(), &format!("Watered '{}'", plant.name));
        Ok((plant, next))
    }

    /// Status summary of one plant, recomputed from the store.
    pub fn status<S>(store: &S, id: i64, now: DateTime<Local>) -> AppResult<StatusSummary>
    where
        S: PlantStore + WeatherStore,
    {
        let plant = Self::get(store, id)?;
        Self::status_of(store, &plant, now)
    }

    pub fn status_of<S>(store: &S, plant: &Plant, now: DateTime<Local>) -> AppResult<StatusSummary>
    where
        S: PlantStore + WeatherStore,
    {
        let logs = store.logs_for_plant(plant.id)?;
        let weather = store.decisions_for_plant(plant.id)?;
        Ok(Core::evaluate(plant, &logs, &weather, now))
    }

    /// Every plant with its summary, in store order.
    pub fn all_with_status<S>(
        store: &S,
        now: DateTime<Local>,
    ) -> AppResult<Vec<(Plant, StatusSummary)>>
    where
        S: PlantStore + WeatherStore,
    {
        let plants = store.plants()?;
        let mut out = Vec::with_capacity(plants.len());
        for p in plants {
            let summary = Self::status_of(store, &p, now)?;
            out.push((p, summary));
        }
        Ok(out)
    }
}

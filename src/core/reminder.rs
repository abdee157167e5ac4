//! Watering reminders on top of the persisted reminder queue.
//!
//! A reminder is a one-shot entry: delivered once by `run_due`, then removed.
//! Watering a plant with reminders enabled schedules the next one.

use crate::db::store::{AuditLog, PlantStore, ReminderQueue};
use crate::errors::{AppError, AppResult};
use crate::models::plant::Plant;
use crate::models::reminder::Reminder;
use chrono::{DateTime, Local, TimeDelta};

pub struct ReminderLogic;

impl ReminderLogic {
    /// Custom delay when set, otherwise the watering interval.
    pub fn delay_for(plant: &Plant) -> AppResult<TimeDelta> {
        match plant.reminder_every_minutes {
            Some(m) => TimeDelta::try_minutes(m).ok_or(AppError::InvalidReminderDelay(m)),
            None => {
                let days = i64::from(plant.watering_interval);
                TimeDelta::try_days(days).ok_or(AppError::InvalidInterval(days))
            }
        }
    }

    /// Fails instead of overflowing when the delay runs past the calendar.
    pub fn next_due(plant: &Plant, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
        let delay = Self::delay_for(plant)?;
        now.checked_add_signed(delay).ok_or(match plant.reminder_every_minutes {
            Some(m) => AppError::InvalidReminderDelay(m),
            None => AppError::InvalidInterval(i64::from(plant.watering_interval)),
        })
    }

    /// Turn reminders on for a plant and schedule the first one.
    pub fn enable<S>(
        store: &S,
        plant_id: i64,
        every_minutes: Option<i64>,
        now: DateTime<Local>,
    ) -> AppResult<DateTime<Local>>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        if let Some(m) = every_minutes
            && m <= 0
        {
            return Err(AppError::InvalidReminderDelay(m));
        }

        let mut plant = store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        plant.reminder_active = true;
        plant.reminder_every_minutes = every_minutes;
        let due = Self::next_due(&plant, now)?;

        store.update_plant(&plant)?;
        store.schedule(plant.id, &due)?;

        store.audit(
            "reminder_on",
            &plant.id.to_string(),
            &format!("Reminder for '{}' due {}", plant.name, due.to_rfc3339()),
        );

        Ok(due)
    }

    /// Turn reminders off and drop the pending one, if any.
    pub fn disable<S>(store: &S, plant_id: i64) -> AppResult<()>
    where
        S: PlantStore + ReminderQueue + AuditLog,
    {
        let mut plant = store
            .plant(plant_id)?
            .ok_or(AppError::PlantNotFound(plant_id))?;

        plant.reminder_active = false;
        plant.reminder_every_minutes = None;
        store.update_plant(&plant)?;
        store.cancel(plant.id)?;

        store.audit(
            "reminder_off",
            &plant.id.to_string(),
            &format!("Reminder for '{}' cancelled", plant.name),
        );
        Ok(())
    }

    /// Next due time after a watering or an edit. `None` when reminders are off.
    pub fn plan(plant: &Plant, now: DateTime<Local>) -> AppResult<Option<DateTime<Local>>> {
        if !plant.reminder_active {
            return Ok(None);
        }
        Self::next_due(plant, now).map(Some)
    }

    /// Queue a due time obtained from `plan`, replacing the pending one.
    pub fn apply_plan<S>(
        store: &S,
        plant_id: i64,
        planned: Option<DateTime<Local>>,
    ) -> AppResult<Option<DateTime<Local>>>
    where
        S: ReminderQueue,
    {
        if let Some(due) = &planned {
            store.schedule(plant_id, due)?;
        }
        Ok(planned)
    }

    /// Deliver every due reminder through `deliver`, then remove it.
    ///
    /// An entry is removed only after `deliver` returned, so a crash between
    /// the two re-delivers it on the next run.
    pub fn run_due<S, F>(store: &S, now: DateTime<Local>, mut deliver: F) -> AppResult<Vec<Reminder>>
    where
        S: ReminderQueue + AuditLog,
        F: FnMut(&Reminder),
    {
        let due: Vec<Reminder> = store
            .pending()?
            .into_iter()
            .filter(|r| r.is_due(now))
            .collect();

        for r in &due {
            deliver(r);
            store.complete(r.id)?;
            store.audit(
                "reminder_fired",
                &r.plant_id.to_string(),
                &format!("Time to water '{}'", r.plant_name),
            );
        }

        Ok(due)
    }
}

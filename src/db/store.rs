//! Store capabilities handed to the logic layer.
//!
//! Components receive the store they need as a parameter (`&impl PlantStore`,
//! ...) instead of reaching for a process-wide handle. `DbPool` is the SQLite
//! implementation of every trait.

use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::care_log::CareLog;
use crate::models::expense::Expense;
use crate::models::photo::Photo;
use crate::models::plant::Plant;
use crate::models::reminder::Reminder;
use crate::models::weather::WeatherDecision;
use chrono::{DateTime, Local, NaiveDate};

pub trait PlantStore {
    fn insert_plant(&self, plant: &Plant) -> AppResult<i64>;
    /// Returns false when no plant has that id.
    fn update_plant(&self, plant: &Plant) -> AppResult<bool>;
    fn delete_plant(&self, id: i64) -> AppResult<bool>;
    fn plant(&self, id: i64) -> AppResult<Option<Plant>>;
    fn plants(&self) -> AppResult<Vec<Plant>>;

    fn insert_log(&self, log: &CareLog) -> AppResult<i64>;
    fn update_log(&self, log: &CareLog) -> AppResult<bool>;
    fn log(&self, id: i64) -> AppResult<Option<CareLog>>;
    fn logs_for_plant(&self, plant_id: i64) -> AppResult<Vec<CareLog>>;

    /// Insert a watering log and advance `last_watered`, atomically.
    fn record_watering(&self, log: &CareLog) -> AppResult<i64>;
}

pub trait WeatherStore {
    /// At most one decision per (plant, date): an existing one is replaced.
    fn upsert_decision(&self, decision: &WeatherDecision) -> AppResult<()>;
    fn decision_for_day(&self, plant_id: i64, date: &NaiveDate)
    -> AppResult<Option<WeatherDecision>>;
    fn decisions_for_plant(&self, plant_id: i64) -> AppResult<Vec<WeatherDecision>>;
    fn decisions_for_date(&self, date: &NaiveDate) -> AppResult<Vec<WeatherDecision>>;
    fn all_decisions(&self) -> AppResult<Vec<WeatherDecision>>;
}

pub trait ExpenseStore {
    fn insert_expense(&self, expense: &Expense) -> AppResult<i64>;
    fn delete_expense(&self, id: i64) -> AppResult<bool>;
    fn expenses_for_plant(&self, plant_id: i64) -> AppResult<Vec<Expense>>;
}

pub trait PhotoStore {
    fn insert_photo(&self, photo: &Photo) -> AppResult<i64>;
    fn photos_for_plant(&self, plant_id: i64) -> AppResult<Vec<Photo>>;
}

/// Persisted, restart-safe queue of one-shot watering reminders.
pub trait ReminderQueue {
    /// Register (or replace) the reminder of a plant.
    fn schedule(&self, plant_id: i64, due_at: &DateTime<Local>) -> AppResult<()>;
    fn cancel(&self, plant_id: i64) -> AppResult<bool>;
    fn pending(&self) -> AppResult<Vec<Reminder>>;
    /// Remove a reminder once it has been delivered.
    fn complete(&self, reminder_id: i64) -> AppResult<()>;
}

pub trait AuditLog {
    /// Best effort: failures are reported, never propagated.
    fn audit(&self, operation: &str, target: &str, message: &str);
}

impl PlantStore for DbPool {
    fn insert_plant(&self, plant: &Plant) -> AppResult<i64> {
        Ok(queries::insert_plant(&self.conn, plant)?)
    }

    fn update_plant(&self, plant: &Plant) -> AppResult<bool> {
        Ok(queries::update_plant(&self.conn, plant)? > 0)
    }

    fn delete_plant(&self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_plant(&self.conn, id)? > 0)
    }

    fn plant(&self, id: i64) -> AppResult<Option<Plant>> {
        Ok(queries::load_plant(&self.conn, id)?)
    }

    fn plants(&self) -> AppResult<Vec<Plant>> {
        Ok(queries::load_plants(&self.conn)?)
    }

    fn insert_log(&self, log: &CareLog) -> AppResult<i64> {
        Ok(queries::insert_care_log(&self.conn, log)?)
    }

    fn update_log(&self, log: &CareLog) -> AppResult<bool> {
        Ok(queries::update_care_log(&self.conn, log)? > 0)
    }

    fn log(&self, id: i64) -> AppResult<Option<CareLog>> {
        Ok(queries::load_care_log(&self.conn, id)?)
    }

    fn logs_for_plant(&self, plant_id: i64) -> AppResult<Vec<CareLog>> {
        Ok(queries::load_care_logs(&self.conn, plant_id)?)
    }

    fn record_watering(&self, log: &CareLog) -> AppResult<i64> {
        let tx = self.conn.unchecked_transaction()?;
        let id = queries::insert_care_log(&tx, log)?;
        queries::set_last_watered(&tx, log.plant_id, &log.logged_at)?;
        tx.commit()?;
        Ok(id)
    }
}

impl WeatherStore for DbPool {
    fn upsert_decision(&self, decision: &WeatherDecision) -> AppResult<()> {
        Ok(queries::upsert_weather_decision(&self.conn, decision)?)
    }

    fn decision_for_day(
        &self,
        plant_id: i64,
        date: &NaiveDate,
    ) -> AppResult<Option<WeatherDecision>> {
        Ok(queries::load_weather_decision(&self.conn, plant_id, date)?)
    }

    fn decisions_for_plant(&self, plant_id: i64) -> AppResult<Vec<WeatherDecision>> {
        Ok(queries::load_weather_history(&self.conn, plant_id)?)
    }

    fn decisions_for_date(&self, date: &NaiveDate) -> AppResult<Vec<WeatherDecision>> {
        Ok(queries::load_weather_for_date(&self.conn, date)?)
    }

    fn all_decisions(&self) -> AppResult<Vec<WeatherDecision>> {
        Ok(queries::load_all_weather(&self.conn)?)
    }
}

impl ExpenseStore for DbPool {
    fn insert_expense(&self, expense: &Expense) -> AppResult<i64> {
        Ok(queries::insert_expense(&self.conn, expense)?)
    }

    fn delete_expense(&self, id: i64) -> AppResult<bool> {
        Ok(queries::delete_expense(&self.conn, id)? > 0)
    }

    fn expenses_for_plant(&self, plant_id: i64) -> AppResult<Vec<Expense>> {
        Ok(queries::load_expenses(&self.conn, plant_id)?)
    }
}

impl PhotoStore for DbPool {
    fn insert_photo(&self, photo: &Photo) -> AppResult<i64> {
        Ok(queries::insert_photo(&self.conn, photo)?)
    }

    fn photos_for_plant(&self, plant_id: i64) -> AppResult<Vec<Photo>> {
        Ok(queries::load_photos(&self.conn, plant_id)?)
    }
}

impl ReminderQueue for DbPool {
    fn schedule(&self, plant_id: i64, due_at: &DateTime<Local>) -> AppResult<()> {
        Ok(queries::schedule_reminder(&self.conn, plant_id, due_at)?)
    }

    fn cancel(&self, plant_id: i64) -> AppResult<bool> {
        Ok(queries::cancel_reminder(&self.conn, plant_id)? > 0)
    }

    fn pending(&self) -> AppResult<Vec<Reminder>> {
        Ok(queries::load_reminders(&self.conn)?)
    }

    fn complete(&self, reminder_id: i64) -> AppResult<()> {
        queries::complete_reminder(&self.conn, reminder_id)?;
        Ok(())
    }
}

impl AuditLog for DbPool {
    fn audit(&self, operation: &str, target: &str, message: &str) {
        log::audit_quiet(&self.conn, operation, target, message);
    }
}

use crate::errors::AppError;
use crate::models::care_log::CareLog;
use crate::models::expense::Expense;
use crate::models::log_status::LogStatus;
use crate::models::photo::Photo;
use crate::models::plant::Plant;
use crate::models::reminder::Reminder;
use crate::models::weather::WeatherDecision;
use crate::utils::date::{from_db_ts, to_db_ts};
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_ts(row: &Row, col: &str) -> Result<DateTime<Local>> {
    let raw: String = row.get(col)?;
    from_db_ts(&raw).ok_or_else(|| conversion_error(0, AppError::InvalidDate(raw.clone())))
}

fn get_opt_ts(row: &Row, col: &str) -> Result<Option<DateTime<Local>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        Some(s) if !s.is_empty() => from_db_ts(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(0, AppError::InvalidDate(s.clone()))),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Plants
// ---------------------------------------------------------------------------

pub fn map_plant(row: &Row) -> Result<Plant> {
    Ok(Plant {
        id: row.get("id")?,
        name: row.get("name")?,
        kind: row.get("kind")?,
        planted_at: get_ts(row, "planted_at")?,
        watering_interval: row.get("watering_interval")?,
        last_watered: get_opt_ts(row, "last_watered")?,
        notes: row.get("notes")?,
        reminder_active: row.get("reminder_active")?,
        reminder_every_minutes: row.get("reminder_every_minutes")?,
    })
}

pub fn insert_plant(conn: &Connection, p: &Plant) -> Result<i64> {
    conn.execute(
        "INSERT INTO plants (name, kind, planted_at, watering_interval, last_watered,
                             notes, reminder_active, reminder_every_minutes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            p.name,
            p.kind,
            to_db_ts(&p.planted_at),
            p.watering_interval,
            p.last_watered.as_ref().map(to_db_ts),
            p.notes,
            p.reminder_active,
            p.reminder_every_minutes,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a plant (all fields except id)
pub fn update_plant(conn: &Connection, p: &Plant) -> Result<usize> {
    conn.execute(
        "UPDATE plants
         SET name = ?1, kind = ?2, planted_at = ?3, watering_interval = ?4,
             last_watered = ?5, notes = ?6, reminder_active = ?7,
             reminder_every_minutes = ?8
         WHERE id = ?9",
        params![
            p.name,
            p.kind,
            to_db_ts(&p.planted_at),
            p.watering_interval,
            p.last_watered.as_ref().map(to_db_ts),
            p.notes,
            p.reminder_active,
            p.reminder_every_minutes,
            p.id,
        ],
    )
}

pub fn delete_plant(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM plants WHERE id = ?1", [id])
}

pub fn load_plant(conn: &Connection, id: i64) -> Result<Option<Plant>> {
    conn.query_row("SELECT * FROM plants WHERE id = ?1", [id], map_plant)
        .optional()
}

pub fn load_plants(conn: &Connection) -> Result<Vec<Plant>> {
    let mut stmt = conn.prepare("SELECT * FROM plants ORDER BY planted_at DESC, id DESC")?;
    let rows = stmt.query_map([], map_plant)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_last_watered(conn: &Connection, plant_id: i64, at: &DateTime<Local>) -> Result<usize> {
    conn.execute(
        "UPDATE plants SET last_watered = ?1 WHERE id = ?2",
        params![to_db_ts(at), plant_id],
    )
}

// ---------------------------------------------------------------------------
// Care logs
// ---------------------------------------------------------------------------

pub fn map_care_log(row: &Row) -> Result<CareLog> {
    let status_str: String = row.get("status")?;
    let status = LogStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidStatus(status_str.clone())))?;

    Ok(CareLog {
        id: row.get("id")?,
        plant_id: row.get("plant_id")?,
        logged_at: get_ts(row, "logged_at")?,
        watered: row.get("watered")?,
        height_cm: row.get("height_cm")?,
        note: row.get("note")?,
        fertilizer_type: row.get("fertilizer_type")?,
        fertilizer_dose: row.get("fertilizer_dose")?,
        status,
    })
}

pub fn insert_care_log(conn: &Connection, log: &CareLog) -> Result<i64> {
    conn.execute(
        "INSERT INTO care_logs (plant_id, logged_at, watered, height_cm, note,
                                fertilizer_type, fertilizer_dose, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            log.plant_id,
            to_db_ts(&log.logged_at),
            log.watered,
            log.height_cm,
            log.note,
            log.fertilizer_type,
            log.fertilizer_dose,
            log.status.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_care_log(conn: &Connection, log: &CareLog) -> Result<usize> {
    conn.execute(
        "UPDATE care_logs
         SET logged_at = ?1, watered = ?2, height_cm = ?3, note = ?4,
             fertilizer_type = ?5, fertilizer_dose = ?6, status = ?7
         WHERE id = ?8",
        params![
            to_db_ts(&log.logged_at),
            log.watered,
            log.height_cm,
            log.note,
            log.fertilizer_type,
            log.fertilizer_dose,
            log.status.to_db_str(),
            log.id,
        ],
    )
}

pub fn load_care_log(conn: &Connection, id: i64) -> Result<Option<CareLog>> {
    conn.query_row("SELECT * FROM care_logs WHERE id = ?1", [id], map_care_log)
        .optional()
}

pub fn load_care_logs(conn: &Connection, plant_id: i64) -> Result<Vec<CareLog>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM care_logs
         WHERE plant_id = ?1
         ORDER BY logged_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([plant_id], map_care_log)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Weather decisions
// ---------------------------------------------------------------------------

pub fn map_weather_decision(row: &Row) -> Result<WeatherDecision> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(0, AppError::InvalidDate(date_str.clone())))?;

    Ok(WeatherDecision {
        id: row.get("id")?,
        plant_id: row.get("plant_id")?,
        date,
        should_water: row.get("should_water")?,
        condition: row.get("condition")?,
    })
}

/// Insert or replace the decision of (plant_id, date).
pub fn upsert_weather_decision(conn: &Connection, d: &WeatherDecision) -> Result<()> {
    conn.execute(
        "INSERT INTO weather_decisions (plant_id, date, should_water, condition)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(plant_id, date) DO UPDATE SET
             should_water = excluded.should_water,
             condition    = excluded.condition",
        params![d.plant_id, d.date_str(), d.should_water, d.condition],
    )?;
    Ok(())
}

pub fn load_weather_decision(
    conn: &Connection,
    plant_id: i64,
    date: &NaiveDate,
) -> Result<Option<WeatherDecision>> {
    conn.query_row(
        "SELECT * FROM weather_decisions WHERE plant_id = ?1 AND date = ?2 LIMIT 1",
        params![plant_id, date.format("%Y-%m-%d").to_string()],
        map_weather_decision,
    )
    .optional()
}

pub fn load_weather_history(conn: &Connection, plant_id: i64) -> Result<Vec<WeatherDecision>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM weather_decisions
         WHERE plant_id = ?1
         ORDER BY date ASC",
    )?;
    let rows = stmt.query_map([plant_id], map_weather_decision)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_weather_for_date(conn: &Connection, date: &NaiveDate) -> Result<Vec<WeatherDecision>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM weather_decisions
         WHERE date = ?1
         ORDER BY plant_id ASC",
    )?;
    let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_weather_decision)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all_weather(conn: &Connection) -> Result<Vec<WeatherDecision>> {
    let mut stmt = conn.prepare("SELECT * FROM weather_decisions ORDER BY date DESC, plant_id ASC")?;
    let rows = stmt.query_map([], map_weather_decision)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Expenses & photos
// ---------------------------------------------------------------------------

pub fn map_expense(row: &Row) -> Result<Expense> {
    Ok(Expense {
        id: row.get("id")?,
        plant_id: row.get("plant_id")?,
        spent_at: get_ts(row, "spent_at")?,
        amount: row.get("amount")?,
        note: row.get("note")?,
    })
}

pub fn insert_expense(conn: &Connection, e: &Expense) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses (plant_id, spent_at, amount, note) VALUES (?1, ?2, ?3, ?4)",
        params![e.plant_id, to_db_ts(&e.spent_at), e.amount, e.note],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_expense(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM expenses WHERE id = ?1", [id])
}

pub fn load_expenses(conn: &Connection, plant_id: i64) -> Result<Vec<Expense>> {
    let mut stmt =
        conn.prepare("SELECT * FROM expenses WHERE plant_id = ?1 ORDER BY spent_at DESC, id DESC")?;
    let rows = stmt.query_map([plant_id], map_expense)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_photo(row: &Row) -> Result<Photo> {
    Ok(Photo {
        id: row.get("id")?,
        plant_id: row.get("plant_id")?,
        uri: row.get("uri")?,
        taken_at: get_ts(row, "taken_at")?,
    })
}

pub fn insert_photo(conn: &Connection, p: &Photo) -> Result<i64> {
    conn.execute(
        "INSERT INTO photos (plant_id, uri, taken_at) VALUES (?1, ?2, ?3)",
        params![p.plant_id, p.uri, to_db_ts(&p.taken_at)],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_photos(conn: &Connection, plant_id: i64) -> Result<Vec<Photo>> {
    let mut stmt =
        conn.prepare("SELECT * FROM photos WHERE plant_id = ?1 ORDER BY taken_at DESC, id DESC")?;
    let rows = stmt.query_map([plant_id], map_photo)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Reminder queue
// ---------------------------------------------------------------------------

fn map_reminder(row: &Row) -> Result<Reminder> {
    Ok(Reminder {
        id: row.get("id")?,
        plant_id: row.get("plant_id")?,
        plant_name: row.get("name")?,
        due_at: get_ts(row, "due_at")?,
    })
}

/// One pending reminder per plant: scheduling again replaces it.
pub fn schedule_reminder(conn: &Connection, plant_id: i64, due_at: &DateTime<Local>) -> Result<()> {
    conn.execute(
        "INSERT INTO reminders (plant_id, due_at, created_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(plant_id) DO UPDATE SET
             due_at     = excluded.due_at,
             created_at = excluded.created_at",
        params![plant_id, to_db_ts(due_at), Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn cancel_reminder(conn: &Connection, plant_id: i64) -> Result<usize> {
    conn.execute("DELETE FROM reminders WHERE plant_id = ?1", [plant_id])
}

pub fn complete_reminder(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM reminders WHERE id = ?1", [id])
}

pub fn load_reminders(conn: &Connection) -> Result<Vec<Reminder>> {
    let mut stmt = conn.prepare(
        "SELECT r.id, r.plant_id, r.due_at, p.name
         FROM reminders r
         JOIN plants p ON p.id = r.plant_id
         ORDER BY r.due_at ASC",
    )?;
    let rows = stmt.query_map([], map_reminder)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------------------

pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// A named schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_plants",
        description: "Created plants table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS plants (
            id                     INTEGER PRIMARY KEY AUTOINCREMENT,
            name                   TEXT NOT NULL,
            kind                   TEXT NOT NULL DEFAULT '',
            planted_at             TEXT NOT NULL,
            watering_interval      INTEGER NOT NULL DEFAULT 3 CHECK(watering_interval >= 1),
            last_watered           TEXT,
            notes                  TEXT NOT NULL DEFAULT '',
            reminder_active        INTEGER NOT NULL DEFAULT 0,
            reminder_every_minutes INTEGER,
            created_at             TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250110_0002_create_care_logs",
        description: "Created care_logs table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS care_logs (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id        INTEGER NOT NULL,
            logged_at       TEXT NOT NULL,
            watered         INTEGER NOT NULL DEFAULT 0,
            height_cm       REAL NOT NULL DEFAULT 0,
            note            TEXT,
            fertilizer_type TEXT,
            fertilizer_dose TEXT,
            status          TEXT NOT NULL DEFAULT 'NOTE'
                            CHECK(status IN ('WATERING','GROWTH','FERTILIZER','NOTE'))
        );

        CREATE INDEX IF NOT EXISTS idx_care_logs_plant_time ON care_logs(plant_id, logged_at);
        "#,
    },
    Migration {
        version: "20250124_0003_create_weather_decisions",
        description: "Created weather_decisions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS weather_decisions (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id     INTEGER NOT NULL,
            date         TEXT NOT NULL,
            should_water INTEGER NOT NULL,
            condition    TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: "20250207_0004_weather_one_decision_per_day",
        description: "Deduplicated weather decisions and added unique (plant_id, date)",
        sql: r#"
        DELETE FROM weather_decisions
        WHERE id NOT IN (
            SELECT MAX(id) FROM weather_decisions GROUP BY plant_id, date
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_weather_plant_date
            ON weather_decisions(plant_id, date);
        "#,
    },
    Migration {
        version: "20250207_0005_create_expenses_photos",
        description: "Created expenses and photos tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id  INTEGER NOT NULL,
            spent_at  TEXT NOT NULL,
            amount    REAL NOT NULL CHECK(amount > 0),
            note      TEXT
        );

        CREATE TABLE IF NOT EXISTS photos (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id  INTEGER NOT NULL,
            uri       TEXT NOT NULL,
            taken_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_plant ON expenses(plant_id);
        CREATE INDEX IF NOT EXISTS idx_photos_plant ON photos(plant_id);
        "#,
    },
    Migration {
        version: "20250301_0006_create_reminders",
        description: "Created reminders queue",
        sql: r#"
        CREATE TABLE IF NOT EXISTS reminders (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            plant_id  INTEGER NOT NULL UNIQUE,
            due_at    TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    },
];

/// Ensure that the `log` table exists. It also stores applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql).map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Migration {} failed: {}", m.version, e)),
        )
    })?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Zip the database file next to itself before touching an existing schema.
fn backup_before_migration(db_path: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::File;
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let to_sql_err = |msg: String| Error::ToSqlConversionFailure(Box::new(std::io::Error::other(msg)));

    let path = std::path::Path::new(db_path);
    let Some(parent) = path.parent() else {
        warning("Could not determine DB directory, backup skipped.");
        return Ok(());
    };

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let backup_path = parent.join(&backup_name);

    let file = File::create(&backup_path)
        .map_err(|e| to_sql_err(format!("Backup failed (create): {}", e)))?;

    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| to_sql_err(format!("Backup failed (start_file): {}", e)))?;

    let content =
        std::fs::read(db_path).map_err(|e| to_sql_err(format!("Backup failed (read): {}", e)))?;

    zip.write_all(&content)
        .map_err(|e| to_sql_err(format!("Backup failed (write_all): {}", e)))?;

    zip.finish()
        .map_err(|e| to_sql_err(format!("Backup failed (finish): {}", e)))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Names of migrations not yet applied to this database.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Work out what is missing
    let mut pending: Vec<&Migration> = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m);
        }
    }

    if pending.is_empty() {
        return Ok(());
    }

    // 3) Existing data → safety backup first
    let has_history = pending.len() < MIGRATIONS.len();
    if has_history {
        warning("Schema upgrade detected, creating safety backup before migration...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if !db_path.is_empty() {
            backup_before_migration(&db_path)?;
        } else {
            warning("Could not determine DB path, backup skipped.");
        }
    }

    // 4) Apply in order
    for m in pending {
        apply(conn, m)?;
        success(format!("Migration applied: {}", m.version));
    }

    Ok(())
}

use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal audit line into the `log` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as [`audit`], but a failure only produces a warning.
pub fn audit_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Open the configured database and bring its schema up to date.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

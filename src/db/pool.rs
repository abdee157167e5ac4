//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! `DbPool` is the one concrete store of the application: it implements the
//! traits of `db::store` and is passed explicitly to every logic component.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing plantlog…");

    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = open_db(&db_path)?;

    log::audit_quiet(&pool.conn, "init", &db_path, "Database initialized");

    success(format!("Database initialized at {}", db_path));
    Ok(())
}

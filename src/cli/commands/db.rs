use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};

/// `db --migrate | --info | --check | --vacuum`, run in that order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        let pending = pending_migrations(&pool.conn)?;
        if pending.is_empty() {
            success("Database schema is up to date.");
        } else {
            info(format!("Running {} migration(s)…", pending.len()));
            run_pending_migrations(&pool.conn)?;
            success("Migration completed.");
        }
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        info("Running integrity check…");
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            success("Integrity check passed.");
        } else {
            error(format!("Integrity check failed: {}", integrity));
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}

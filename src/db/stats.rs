use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::from_db_ts;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Plants", "plants"),
        ("Care logs", "care_logs"),
        ("Weather decisions", "weather_decisions"),
        ("Expenses", "expenses"),
        ("Photos", "photos"),
        ("Pending reminders", "reminders"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) JOURNAL RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool.with_conn(|conn| {
        conn.query_row(
            "SELECT MIN(logged_at), MAX(logged_at) FROM care_logs",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    })?;

    let fmt = |v: &Option<String>| {
        v.as_deref()
            .and_then(from_db_ts)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Journal range:{}", CYAN, RESET);
    println!("    from: {}", fmt(&first));
    println!("    to:   {}", fmt(&last));

    println!();
    Ok(())
}

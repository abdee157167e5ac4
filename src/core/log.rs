use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "water" => Colour::Green,
        "del" | "expense_del" => Colour::Red,
        "edit" | "edit_log" => Colour::Yellow,
        "log" | "photo" | "expense" => Colour::Cyan,
        "weather" => Colour::Blue,
        "reminder_on" | "reminder_off" | "reminder_fired" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(120, 200, 80),
        _ => Colour::White,
    }
}

/// Cut to `MAX_OP_WIDTH` visible chars and re-colour the operation word.
fn render_op_target(operation: &str, target: &str) -> String {
    let color = color_for_operation(operation);

    let visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, render_op_target(&operation, &target), message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| strip_ansi(&r.2).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

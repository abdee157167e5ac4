use crate::cli::parser::ExpenseCommands;
use crate::config::Config;
use crate::core::expense::ExpenseLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::{bold, format_amount};
use crate::utils::table::Table;

pub fn handle(cmd: &ExpenseCommands, cfg: &Config) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;

    match cmd {
        ExpenseCommands::Add {
            id,
            amount,
            note,
            date: date_arg,
        } => {
            let spent_at = date::parse_optional_datetime(date_arg.as_ref())?;
            let e = ExpenseLogic::add(&pool, *id, *amount, note.clone(), spent_at)?;
            success(format!(
                "Expense #{} of {} recorded for plant #{}.",
                e.id,
                format_amount(e.amount),
                e.plant_id
            ));
        }

        ExpenseCommands::List { id } => {
            let (expenses, total) = ExpenseLogic::list(&pool, *id)?;
            if expenses.is_empty() {
                info(format!("No expenses for plant #{}.", id));
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Date", "Amount", "Note"]);
            for e in &expenses {
                table.add_row(vec![
                    e.id.to_string(),
                    e.spent_at.format("%Y-%m-%d").to_string(),
                    format_amount(e.amount),
                    colorize_optional(e.note.as_deref().unwrap_or("--")),
                ]);
            }
            print!("{}", table.render());
            println!("{} {}", bold("Total:"), format_amount(total));
        }

        ExpenseCommands::Del { expense_id } => {
            ExpenseLogic::delete(&pool, *expense_id)?;
            success(format!("Expense #{} deleted.", expense_id));
        }
    }

    Ok(())
}

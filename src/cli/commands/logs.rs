use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::care_log::CareLogLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::models::care_log::CareLog;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::format_height;
use crate::utils::table::Table;

/// One-line description of an entry's content.
pub(crate) fn describe_log(log: &CareLog) -> String {
    let mut parts = Vec::new();
    if log.watered {
        parts.push("💧 watered".to_string());
    }
    if log.is_growth() {
        parts.push(format!("📏 {}", format_height(log.height_cm)));
    }
    if let Some(fert) = &log.fertilizer_type {
        match &log.fertilizer_dose {
            Some(dose) => parts.push(format!("🧪 {fert} ({dose})")),
            None => parts.push(format!("🧪 {fert}")),
        }
    }
    if let Some(note) = &log.note {
        parts.push(format!("📝 {note}"));
    }
    if parts.is_empty() {
        parts.push(log.status.label().to_string());
    }
    parts.join("  ")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Logs { id } = cmd {
        let pool = open_db(&cfg.database)?;
        let logs = CareLogLogic::list(&pool, *id)?;

        if logs.is_empty() {
            info(format!("No journal entries for plant #{}.", id));
            return Ok(());
        }

        let mut table = Table::new(&["ID", "Date", "Status", "Height", "Entry"]);
        for log in &logs {
            let height = if log.is_growth() {
                format_height(log.height_cm)
            } else {
                "--".to_string()
            };
            table.add_row(vec![
                log.id.to_string(),
                log.datetime_str(),
                log.status.label().to_string(),
                colorize_optional(&height),
                describe_log(log),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}

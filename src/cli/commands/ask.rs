use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::advisor::{AdvisorLogic, build_plant_prompt};
use crate::core::plant::PlantLogic;
use crate::db::initialize::open_db;
use crate::db::store::PlantStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

const WRAP_WIDTH: usize = 90;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { plant, prompt } = cmd {
        let question = prompt.join(" ");

        let full_prompt = match plant {
            Some(id) => {
                let pool = open_db(&cfg.database)?;
                let p = PlantLogic::get(&pool, *id)?;
                let logs = pool.logs_for_plant(p.id)?;
                let mut text = build_plant_prompt(&p, &logs, cfg.assistant.history_logs);
                if !question.trim().is_empty() {
                    text.push_str(&format!("\nAlso: {}\n", question.trim()));
                }
                text
            }
            None => question,
        };

        info("Asking the assistant…");
        let answer = AdvisorLogic::ask(&cfg.assistant, &full_prompt)?;

        println!();
        for line in textwrap::wrap(answer.trim(), WRAP_WIDTH) {
            println!("{line}");
        }
    }

    Ok(())
}

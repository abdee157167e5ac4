//! Prompt construction for the plant-care assistant.

use crate::config::AssistantConfig;
use crate::errors::{AppError, AppResult};
use crate::models::care_log::CareLog;
use crate::models::plant::Plant;
use crate::remote::chat;
use std::fmt::Write;

/// Full prompt describing a plant and its most recent journal entries,
/// newest first, at most `limit` of them.
pub fn build_plant_prompt(plant: &Plant, logs: &[CareLog], limit: usize) -> String {
    let mut p = String::new();

    p.push_str("Act as an expert agronomist. I look after this plant and need technical advice.\n\n");
    p.push_str("PLANT DATA:\n");
    let _ = writeln!(p, "- Name: {}", plant.name);
    let _ = writeln!(p, "- Species/type: {}", plant.kind);
    let _ = writeln!(p, "- Planted on: {}", plant.planted_str());
    let _ = writeln!(p, "- Recommended watering: every {} days", plant.watering_interval);
    if !plant.notes.trim().is_empty() {
        let _ = writeln!(p, "- Notes: {}", plant.notes.trim());
    }

    let mut recent: Vec<&CareLog> = logs.iter().collect();
    recent.sort_by(|a, b| b.logged_at.cmp(&a.logged_at).then(b.id.cmp(&a.id)));
    recent.truncate(limit);

    if recent.is_empty() {
        p.push_str("\nThere are no journal entries yet.\n");
    } else {
        p.push_str("\nJOURNAL (most recent entries):\n");
        for log in recent {
            let _ = writeln!(p, "* {}:", log.date_str());
            let _ = writeln!(p, "  - Status: {}", log.status.label());
            if log.watered {
                p.push_str("  - Watered.\n");
            }
            if log.is_growth() {
                let _ = writeln!(p, "  - Height: {:.1} cm", log.height_cm);
            }
            if let Some(fert) = &log.fertilizer_type {
                let dose = log.fertilizer_dose.as_deref().unwrap_or("not specified");
                let _ = writeln!(p, "  - Fertilizer: {} (dose: {})", fert, dose);
            }
            if let Some(note) = &log.note {
                let _ = writeln!(p, "  - Note: '{}'", note);
            }
        }
    }

    p.push_str("\nTASK: based on this information, give me a short technical analysis:\n");
    p.push_str("1. How is its progress (growth and health)?\n");
    p.push_str("2. Watering or fertilizing recommendations for the next days.\n");
    let _ = writeln!(p, "3. One expert tip specific to its species: {}.", plant.kind);

    p
}

pub struct AdvisorLogic;

impl AdvisorLogic {
    /// Send a prompt to the assistant. Blank prompts are rejected before any request.
    pub fn ask(cfg: &AssistantConfig, prompt: &str) -> AppResult<String> {
        if prompt.trim().is_empty() {
            return Err(AppError::InvalidInput("prompt cannot be empty".into()));
        }
        chat::ask(cfg, prompt)
    }
}

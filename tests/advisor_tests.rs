use plantlog::config::AssistantConfig;
use plantlog::core::advisor::{AdvisorLogic, build_plant_prompt};
use plantlog::errors::AppError;
use plantlog::models::care_log::CareLog;
use plantlog::models::log_status::LogStatus;
use plantlog::models::plant::Plant;

mod common;
use common::noon;

fn tomato() -> Plant {
    let mut p = Plant::new("Cherry", "Solanum lycopersicum", noon(2025, 3, 1), 2, "balcony, full sun");
    p.id = 7;
    p
}

fn entry(id: i64, day: u32) -> CareLog {
    CareLog {
        id,
        plant_id: 7,
        logged_at: noon(2025, 4, day),
        watered: false,
        height_cm: 0.0,
        note: Some(format!("entry {day}")),
        fertilizer_type: None,
        fertilizer_dose: None,
        status: LogStatus::Note,
    }
}

#[test]
fn test_prompt_describes_plant() {
    let prompt = build_plant_prompt(&tomato(), &[], 10);

    assert!(prompt.contains("Name: Cherry"));
    assert!(prompt.contains("Species/type: Solanum lycopersicum"));
    assert!(prompt.contains("Planted on: 2025-03-01"));
    assert!(prompt.contains("every 2 days"));
    assert!(prompt.contains("balcony, full sun"));
    assert!(prompt.contains("no journal entries yet"));
}

#[test]
fn test_prompt_keeps_most_recent_entries_newest_first() {
    let logs: Vec<CareLog> = (1..=12).map(|d| entry(i64::from(d), d)).collect();
    let prompt = build_plant_prompt(&tomato(), &logs, 10);

    assert!(prompt.contains("entry 12"));
    assert!(prompt.contains("entry 3"));
    assert!(!prompt.contains("'entry 2'"));
    assert!(!prompt.contains("'entry 1'"));

    let newest = prompt.find("entry 12").unwrap();
    let older = prompt.find("entry 11").unwrap();
    assert!(newest < older);
}

#[test]
fn test_prompt_lists_care_details() {
    let mut log = entry(1, 5);
    log.watered = true;
    log.height_cm = 42.0;
    log.fertilizer_type = Some("Tomato feed".into());
    log.status = LogStatus::Fertilizer;

    let prompt = build_plant_prompt(&tomato(), &[log], 10);
    assert!(prompt.contains("2025-04-05"));
    assert!(prompt.contains("Status: fertilizer"));
    assert!(prompt.contains("Watered."));
    assert!(prompt.contains("Height: 42.0 cm"));
    assert!(prompt.contains("Fertilizer: Tomato feed (dose: not specified)"));
}

#[test]
fn test_empty_prompt_is_rejected_before_any_request() {
    let err = AdvisorLogic::ask(&AssistantConfig::default(), "   ").unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_missing_api_key_is_a_config_error() {
    let cfg = AssistantConfig {
        api_key: String::new(),
        ..AssistantConfig::default()
    };
    let err = AdvisorLogic::ask(&cfg, "How often should I water a fern?").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

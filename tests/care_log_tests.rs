use plantlog::core::care_log::{CareLogLogic, LogInput};
use plantlog::core::plant::PlantLogic;
use plantlog::core::reminder::ReminderLogic;
use plantlog::db::store::{PlantStore, ReminderQueue};
use plantlog::errors::AppError;
use plantlog::models::log_status::LogStatus;

mod common;
use common::{memory_store, noon};

#[test]
fn test_status_is_inferred_from_content() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Rose", "", noon(2025, 1, 1), 3, "").unwrap();
    let now = noon(2025, 1, 2);

    let growth = LogInput {
        height_cm: Some(12.0),
        ..LogInput::default()
    };
    let fert = LogInput {
        fertilizer_type: Some("NPK 10-10-10".into()),
        fertilizer_dose: Some("5 ml".into()),
        ..LogInput::default()
    };
    let note = LogInput {
        note: Some("new leaf".into()),
        ..LogInput::default()
    };

    assert_eq!(CareLogLogic::add(&pool, p.id, &growth, now).unwrap().status, LogStatus::Growth);
    assert_eq!(CareLogLogic::add(&pool, p.id, &fert, now).unwrap().status, LogStatus::Fertilizer);
    assert_eq!(CareLogLogic::add(&pool, p.id, &note, now).unwrap().status, LogStatus::Note);

    let explicit = LogInput {
        height_cm: Some(13.0),
        status: Some("n".into()),
        ..LogInput::default()
    };
    assert_eq!(CareLogLogic::add(&pool, p.id, &explicit, now).unwrap().status, LogStatus::Note);
}

#[test]
fn test_negative_height_is_rejected() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Rose", "", noon(2025, 1, 1), 3, "").unwrap();

    let input = LogInput {
        height_cm: Some(-1.0),
        ..LogInput::default()
    };
    let err = CareLogLogic::add(&pool, p.id, &input, noon(2025, 1, 2)).unwrap_err();
    assert!(matches!(err, AppError::InvalidHeight(_)));
    assert!(pool.logs_for_plant(p.id).unwrap().is_empty());
}

#[test]
fn test_watered_entry_advances_last_watered() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Mint", "", noon(2025, 1, 1), 3, "").unwrap();
    PlantLogic::water(&pool, p.id, None, noon(2025, 1, 5)).unwrap();

    // older entry: journal only
    let older = LogInput {
        logged_at: Some(noon(2025, 1, 3)),
        watered: Some(true),
        ..LogInput::default()
    };
    CareLogLogic::add(&pool, p.id, &older, noon(2025, 1, 6)).unwrap();
    assert_eq!(pool.plant(p.id).unwrap().unwrap().last_watered, Some(noon(2025, 1, 5)));

    // newer entry: moves last_watered
    let newer = LogInput {
        logged_at: Some(noon(2025, 1, 6)),
        watered: Some(true),
        ..LogInput::default()
    };
    CareLogLogic::add(&pool, p.id, &newer, noon(2025, 1, 6)).unwrap();
    assert_eq!(pool.plant(p.id).unwrap().unwrap().last_watered, Some(noon(2025, 1, 6)));

    assert_eq!(pool.logs_for_plant(p.id).unwrap().len(), 3);
}

#[test]
fn test_watered_entry_reschedules_active_reminder() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Mint", "", noon(2025, 1, 1), 3, "").unwrap();
    ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 1)).unwrap();

    let input = LogInput {
        watered: Some(true),
        ..LogInput::default()
    };
    CareLogLogic::add(&pool, p.id, &input, noon(2025, 1, 2)).unwrap();

    let pending = pool.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].due_at, noon(2025, 1, 5));
}

#[test]
fn test_edit_touches_only_given_fields() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Ivy", "", noon(2025, 1, 1), 3, "").unwrap();
    let input = LogInput {
        height_cm: Some(30.0),
        note: Some("before".into()),
        ..LogInput::default()
    };
    let log = CareLogLogic::add(&pool, p.id, &input, noon(2025, 1, 2)).unwrap();

    let edit = LogInput {
        height_cm: Some(31.5),
        ..LogInput::default()
    };
    let edited = CareLogLogic::edit(&pool, log.id, &edit).unwrap();

    assert_eq!(edited.height_cm, 31.5);
    assert_eq!(edited.note.as_deref(), Some("before"));
    assert_eq!(edited.logged_at, noon(2025, 1, 2));

    let stored = pool.log(log.id).unwrap().unwrap();
    assert_eq!(stored.height_cm, 31.5);
}

#[test]
fn test_edit_unknown_entry() {
    let pool = memory_store();
    let err = CareLogLogic::edit(&pool, 99, &LogInput::default()).unwrap_err();
    assert!(matches!(err, AppError::LogNotFound(99)));
}

#[test]
fn test_list_is_chronological() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Ivy", "", noon(2025, 1, 1), 3, "").unwrap();

    for day in [9, 3, 6] {
        let input = LogInput {
            logged_at: Some(noon(2025, 1, day)),
            note: Some(format!("day {day}")),
            ..LogInput::default()
        };
        CareLogLogic::add(&pool, p.id, &input, noon(2025, 1, 10)).unwrap();
    }

    let notes: Vec<_> = CareLogLogic::list(&pool, p.id)
        .unwrap()
        .into_iter()
        .filter_map(|l| l.note)
        .collect();
    assert_eq!(notes, vec!["day 3", "day 6", "day 9"]);
}

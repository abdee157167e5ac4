use plantlog::core::plant::{PlantEdit, PlantLogic};
use plantlog::core::reminder::ReminderLogic;
use plantlog::db::store::{PlantStore, ReminderQueue};
use plantlog::errors::AppError;

mod common;
use common::{at, memory_store, noon};

#[test]
fn test_enable_schedules_after_interval() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 7, "").unwrap();

    let due = ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 2)).unwrap();
    assert_eq!(due, noon(2025, 1, 9));

    let plant = pool.plant(p.id).unwrap().unwrap();
    assert!(plant.reminder_active);
    assert_eq!(plant.reminder_every_minutes, None);
    assert_eq!(pool.pending().unwrap().len(), 1);
}

#[test]
fn test_custom_delay_in_minutes() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 7, "").unwrap();

    let due = ReminderLogic::enable(&pool, p.id, Some(90), at(2025, 1, 2, 10)).unwrap();
    assert_eq!(due, at(2025, 1, 2, 10) + chrono::Duration::minutes(90));

    let err = ReminderLogic::enable(&pool, p.id, Some(0), noon(2025, 1, 2)).unwrap_err();
    assert!(matches!(err, AppError::InvalidReminderDelay(0)));
}

#[test]
fn test_one_pending_reminder_per_plant() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 2, "").unwrap();

    ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 1)).unwrap();
    PlantLogic::water(&pool, p.id, None, noon(2025, 1, 2)).unwrap();
    PlantLogic::water(&pool, p.id, None, noon(2025, 1, 3)).unwrap();

    let pending = pool.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].due_at, noon(2025, 1, 5));
}

#[test]
fn test_water_without_reminder_schedules_nothing() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 2, "").unwrap();

    let (_, next) = PlantLogic::water(&pool, p.id, None, noon(2025, 1, 2)).unwrap();
    assert!(next.is_none());
    assert!(pool.pending().unwrap().is_empty());
}

#[test]
fn test_disable_cancels() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 2, "").unwrap();
    ReminderLogic::enable(&pool, p.id, Some(30), noon(2025, 1, 1)).unwrap();

    ReminderLogic::disable(&pool, p.id).unwrap();

    let plant = pool.plant(p.id).unwrap().unwrap();
    assert!(!plant.reminder_active);
    assert_eq!(plant.reminder_every_minutes, None);
    assert!(pool.pending().unwrap().is_empty());
}

#[test]
fn test_interval_edit_moves_reminder() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 2, "").unwrap();
    ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 1)).unwrap();

    let edit = PlantEdit {
        watering_interval: Some(5),
        ..PlantEdit::default()
    };
    PlantLogic::edit(&pool, p.id, &edit, noon(2025, 1, 2)).unwrap();

    assert_eq!(pool.pending().unwrap()[0].due_at, noon(2025, 1, 7));
}

#[test]
fn test_run_due_delivers_and_removes() {
    let pool = memory_store();
    let a = PlantLogic::add(&pool, "Early", "", noon(2025, 1, 1), 1, "").unwrap();
    let b = PlantLogic::add(&pool, "Late", "", noon(2025, 1, 1), 10, "").unwrap();
    ReminderLogic::enable(&pool, a.id, None, noon(2025, 1, 1)).unwrap();
    ReminderLogic::enable(&pool, b.id, None, noon(2025, 1, 1)).unwrap();

    let mut seen = Vec::new();
    let delivered =
        ReminderLogic::run_due(&pool, noon(2025, 1, 3), |r| seen.push(r.plant_name.clone())).unwrap();

    assert_eq!(delivered.len(), 1);
    assert_eq!(seen, vec!["Early".to_string()]);

    let pending = pool.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].plant_id, b.id);

    // already delivered: not repeated
    let again = ReminderLogic::run_due(&pool, noon(2025, 1, 3), |_| {}).unwrap();
    assert!(again.is_empty());
}

#[test]
fn test_out_of_range_custom_delay_is_rejected() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 7, "").unwrap();

    let huge = i64::MAX / 2;
    let err = ReminderLogic::enable(&pool, p.id, Some(huge), noon(2025, 1, 2)).unwrap_err();
    assert!(matches!(err, AppError::InvalidReminderDelay(m) if m == huge));

    let plant = pool.plant(p.id).unwrap().unwrap();
    assert!(!plant.reminder_active);
    assert_eq!(plant.reminder_every_minutes, None);
    assert!(pool.pending().unwrap().is_empty());
}

#[test]
fn test_interval_past_the_calendar_is_rejected() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Cactus", "", noon(2025, 1, 1), 1_000_000_000, "").unwrap();

    let err = ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 2)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval(1_000_000_000)));
    assert!(!pool.plant(p.id).unwrap().unwrap().reminder_active);
    assert!(pool.pending().unwrap().is_empty());
}

#[test]
fn test_edit_to_unschedulable_interval_keeps_plant_unchanged() {
    let pool = memory_store();
    let p = PlantLogic::add(&pool, "Orchid", "", noon(2025, 1, 1), 7, "").unwrap();
    ReminderLogic::enable(&pool, p.id, None, noon(2025, 1, 1)).unwrap();

    let edit = PlantEdit {
        watering_interval: Some(1_000_000_000),
        ..PlantEdit::default()
    };
    let err = PlantLogic::edit(&pool, p.id, &edit, noon(2025, 1, 2)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInterval(_)));

    assert_eq!(pool.plant(p.id).unwrap().unwrap().watering_interval, 7);
    assert_eq!(pool.pending().unwrap()[0].due_at, noon(2025, 1, 8));
}

use plantlog::core::calculator::days::days_between;
use plantlog::core::calculator::health::classify;
use plantlog::core::logic::Core;
use plantlog::models::care_log::CareLog;
use plantlog::models::log_status::LogStatus;
use plantlog::models::plant::Plant;
use plantlog::models::status::HealthStatus;
use plantlog::models::weather::WeatherDecision;

mod common;
use common::{at, noon};

fn plant(interval: u32) -> Plant {
    let mut p = Plant::new("Fern", "Nephrolepis", noon(2025, 1, 1), interval, "");
    p.id = 1;
    p
}

fn growth(id: i64, y: i32, m: u32, d: u32, h: f64) -> CareLog {
    CareLog {
        id,
        plant_id: 1,
        logged_at: noon(y, m, d),
        watered: false,
        height_cm: h,
        note: None,
        fertilizer_type: None,
        fertilizer_dose: None,
        status: LogStatus::Growth,
    }
}

fn decision(day: u32, should_water: bool) -> WeatherDecision {
    let date = noon(2025, 1, day).date_naive();
    WeatherDecision::new(1, date, should_water, if should_water { "Sunny" } else { "Rain" })
}

#[test]
fn test_never_watered_is_no_data() {
    let s = Core::evaluate(&plant(3), &[], &[], noon(2025, 1, 10));

    assert_eq!(s.health, HealthStatus::NoData);
    assert_eq!(s.days_since_watered, None);
    assert_eq!(s.total_waterings, 0);
    assert_eq!(s.total_growth_logs, 0);
    assert_eq!(s.current_height_cm, 0.0);
    assert_eq!(s.previous_height_cm, None);
    assert_eq!(s.days_since_planting, 9);
}

#[test]
fn test_health_thresholds_for_every_interval() {
    for interval in 1..=10u32 {
        let i = i64::from(interval);
        for days in 0..=(i + 6) {
            let expected = if days <= i {
                HealthStatus::Healthy
            } else if days <= i + 2 {
                HealthStatus::Attention
            } else {
                HealthStatus::Critical
            };
            assert_eq!(
                classify(Some(days), interval),
                expected,
                "interval={interval} days={days}"
            );
        }
    }
}

#[test]
fn test_same_calendar_day_is_zero_days() {
    assert_eq!(days_between(at(2025, 5, 3, 0), at(2025, 5, 3, 23)), 0);
    assert_eq!(days_between(at(2025, 5, 3, 23), at(2025, 5, 4, 0)), 1);
}

#[test]
fn test_watered_three_days_ago_interval_three_is_healthy() {
    let mut p = plant(3);
    p.last_watered = Some(at(2025, 1, 7, 8));

    let s = Core::evaluate(&p, &[], &[], at(2025, 1, 10, 21));
    assert_eq!(s.days_since_watered, Some(3));
    assert_eq!(s.health, HealthStatus::Healthy);
}

#[test]
fn test_watered_six_days_ago_interval_three_is_critical() {
    let mut p = plant(3);
    p.last_watered = Some(noon(2025, 1, 4));

    let s = Core::evaluate(&p, &[], &[], noon(2025, 1, 10));
    assert_eq!(s.days_since_watered, Some(6));
    assert_eq!(s.health, HealthStatus::Critical);
}

#[test]
fn test_watered_five_days_ago_interval_three_needs_attention() {
    let mut p = plant(3);
    p.last_watered = Some(noon(2025, 1, 5));

    let s = Core::evaluate(&p, &[], &[], noon(2025, 1, 10));
    assert_eq!(s.health, HealthStatus::Attention);
}

#[test]
fn test_falls_back_to_latest_watered_log() {
    let logs = vec![
        CareLog::watering(1, noon(2025, 1, 2), None),
        CareLog::watering(1, noon(2025, 1, 8), None),
        CareLog::watering(1, noon(2025, 1, 5), None),
    ];

    let s = Core::evaluate(&plant(3), &logs, &[], noon(2025, 1, 10));
    assert_eq!(s.days_since_watered, Some(2));
    assert_eq!(s.total_waterings, 3);
    assert_eq!(s.health, HealthStatus::Healthy);
}

#[test]
fn test_plant_field_wins_over_logs() {
    let mut p = plant(3);
    p.last_watered = Some(noon(2025, 1, 3));
    let logs = vec![CareLog::watering(1, noon(2025, 1, 9), None)];

    let s = Core::evaluate(&p, &logs, &[], noon(2025, 1, 10));
    assert_eq!(s.days_since_watered, Some(7));
}

#[test]
fn test_growth_uses_latest_two_measurements() {
    let logs = vec![
        growth(1, 2025, 1, 10, 20.0),
        growth(2, 2025, 1, 20, 25.0),
        growth(3, 2025, 1, 15, 22.0),
    ];

    let s = Core::evaluate(&plant(3), &logs, &[], noon(2025, 1, 25));
    assert_eq!(s.current_height_cm, 25.0);
    assert_eq!(s.previous_height_cm, Some(22.0));
    assert_eq!(s.total_growth_logs, 3);

    let dates: Vec<_> = s.growth_history.iter().map(|g| g.height_cm).collect();
    assert_eq!(dates, vec![20.0, 22.0, 25.0]);
}

#[test]
fn test_current_height_is_order_independent() {
    let base = vec![
        growth(1, 2025, 2, 1, 10.0),
        growth(2, 2025, 2, 3, 12.5),
        growth(3, 2025, 2, 7, 15.0),
        growth(4, 2025, 2, 5, 13.0),
    ];
    let expected = Core::evaluate(&plant(3), &base, &[], noon(2025, 2, 10));

    let mut rotated = base.clone();
    for _ in 0..base.len() {
        rotated.rotate_left(1);
        let s = Core::evaluate(&plant(3), &rotated, &[], noon(2025, 2, 10));
        assert_eq!(s.current_height_cm, expected.current_height_cm);
        assert_eq!(s.previous_height_cm, expected.previous_height_cm);
    }

    let mut reversed = base;
    reversed.reverse();
    let s = Core::evaluate(&plant(3), &reversed, &[], noon(2025, 2, 10));
    assert_eq!(s.current_height_cm, 15.0);
    assert_eq!(s.previous_height_cm, Some(13.0));
}

#[test]
fn test_zero_height_entries_are_not_growth() {
    let logs = vec![
        growth(1, 2025, 1, 2, 0.0),
        growth(2, 2025, 1, 3, 8.0),
        CareLog::watering(1, noon(2025, 1, 4), Some("deep soak".into())),
    ];

    let s = Core::evaluate(&plant(3), &logs, &[], noon(2025, 1, 5));
    assert_eq!(s.total_growth_logs, 1);
    assert_eq!(s.current_height_cm, 8.0);
    assert_eq!(s.previous_height_cm, None);
}

#[test]
fn test_rain_counters_match_skipped_days() {
    let weather = vec![
        decision(1, false),
        decision(2, true),
        decision(3, false),
        decision(4, false),
    ];

    let s = Core::evaluate(&plant(3), &[], &weather, noon(2025, 1, 5));
    assert_eq!(s.rain_detected, 3);
    assert_eq!(s.watering_avoided, s.rain_detected);
}

#[test]
fn test_evaluate_is_deterministic() {
    let mut p = plant(4);
    p.last_watered = Some(noon(2025, 3, 1));
    let logs = vec![growth(1, 2025, 2, 20, 30.0), growth(2, 2025, 2, 25, 31.0)];
    let weather = vec![decision(2, false)];
    let now = noon(2025, 3, 4);

    let a = Core::evaluate(&p, &logs, &weather, now);
    let b = Core::evaluate(&p, &logs, &weather, now);

    assert_eq!(a.health, b.health);
    assert_eq!(a.days_since_watered, b.days_since_watered);
    assert_eq!(a.growth_history, b.growth_history);
    assert_eq!(a.rain_detected, b.rain_detected);
}

#[test]
fn test_reference_scenarios() {
    let now = noon(2025, 1, 11);
    let mut p = plant(3);
    p.planted_at = noon(2025, 1, 1);

    p.last_watered = Some(noon(2025, 1, 7));
    let s = Core::evaluate(&p, &[], &[], now);
    assert_eq!(s.days_since_planting, 10);
    assert_eq!(s.health, HealthStatus::Attention);

    p.last_watered = Some(noon(2025, 1, 4));
    assert_eq!(Core::evaluate(&p, &[], &[], now).health, HealthStatus::Critical);

    let logs = vec![growth(1, 2025, 1, 1, 5.0), growth(2, 2025, 1, 3, 8.0)];
    let s = Core::evaluate(&p, &logs, &[], now);
    assert_eq!(s.current_height_cm, 8.0);
    assert_eq!(s.previous_height_cm, Some(5.0));

    let weather = vec![decision(1, false), decision(2, true), decision(3, false)];
    let s = Core::evaluate(&p, &[], &weather, now);
    assert_eq!(s.rain_detected, 2);
    assert_eq!(s.watering_avoided, 2);
}

#[test]
fn test_future_timestamps_give_negative_days() {
    let mut p = plant(3);
    p.last_watered = Some(noon(2025, 1, 12));

    let s = Core::evaluate(&p, &[], &[], noon(2025, 1, 10));
    assert_eq!(s.days_since_watered, Some(-2));
    assert_eq!(s.health, HealthStatus::Healthy);
}

#[test]
fn test_same_instant_measurements_order_by_id() {
    let first = growth(1, 2025, 3, 1, 5.0);
    let second = growth(2, 2025, 3, 1, 8.0);

    let forward = Core::evaluate(&plant(3), &[first.clone(), second.clone()], &[], noon(2025, 3, 2));
    let backward = Core::evaluate(&plant(3), &[second, first], &[], noon(2025, 3, 2));

    assert_eq!(forward.current_height_cm, 8.0);
    assert_eq!(forward.previous_height_cm, Some(5.0));
    assert_eq!(backward.current_height_cm, forward.current_height_cm);
    assert_eq!(backward.previous_height_cm, forward.previous_height_cm);
    assert_eq!(backward.growth_history, forward.growth_history);
}

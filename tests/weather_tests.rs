use chrono::NaiveDate;
use plantlog::config::WeatherConfig;
use plantlog::core::plant::PlantLogic;
use plantlog::core::weather::{RainMatcher, WeatherAlert, WeatherLogic};
use plantlog::db::store::WeatherStore;
use plantlog::models::weather::ForecastDay;
use plantlog::remote::weather_api::parse_forecast;
use predicates::str::contains;
use std::fs;

mod common;
use common::{fixture, init_db_with_plants, memory_store, noon, plc, setup_test_db};

fn day(date: &str, condition: &str, min: f64, max: f64) -> ForecastDay {
    ForecastDay {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        condition: condition.to_string(),
        max_temp_c: max,
        min_temp_c: min,
    }
}

#[test]
fn test_rain_keywords_are_case_insensitive() {
    let m = RainMatcher::new(&WeatherConfig::default().rain_keywords).unwrap();

    assert!(m.is_rain("Lluvia moderada"));
    assert!(m.is_rain("Patchy LIGHT DRIZZLE"));
    assert!(m.is_rain("chubascos aislados"));
    assert!(!m.is_rain("Soleado"));
    assert!(!m.is_rain("Parcialmente nublado"));
}

#[test]
fn test_empty_keyword_list_never_matches() {
    let m = RainMatcher::new(&[]).unwrap();
    assert!(!m.is_rain("rain"));
}

#[test]
fn test_extreme_alerts() {
    let cfg = WeatherConfig::default();

    assert_eq!(
        WeatherLogic::extreme_alert(&day("2025-01-01", "Clear", 8.0, 35.0), &cfg),
        Some(WeatherAlert::Cold { min_temp_c: 8.0 })
    );
    assert_eq!(
        WeatherLogic::extreme_alert(&day("2025-01-01", "Clear", 20.0, 33.0), &cfg),
        Some(WeatherAlert::Heat { max_temp_c: 33.0 })
    );
    assert_eq!(
        WeatherLogic::extreme_alert(&day("2025-01-01", "Clear", 10.0, 32.0), &cfg),
        None
    );
}

#[test]
fn test_today_is_refreshed_and_future_days_kept() {
    let pool = memory_store();
    let cfg = WeatherConfig::default();
    let p = PlantLogic::add(&pool, "Basil", "", noon(2025, 5, 1), 2, "").unwrap();
    let plants = vec![p.clone()];

    let first = vec![
        day("2025-06-01", "Sunny", 18.0, 27.0),
        day("2025-06-02", "Moderate rain", 17.0, 24.0),
    ];
    let report = WeatherLogic::apply_forecast(&pool, &plants, &first, &cfg).unwrap();
    assert_eq!(report.written.len(), 2);
    assert_eq!(report.water_today, vec!["Basil".to_string()]);
    assert!(report.alert.is_none());

    // next run: both days changed
    let second = vec![
        day("2025-06-01", "Light rain shower", 18.0, 25.0),
        day("2025-06-02", "Sunny", 17.0, 28.0),
    ];
    let report = WeatherLogic::apply_forecast(&pool, &plants, &second, &cfg).unwrap();
    assert_eq!(report.written.len(), 1);
    assert_eq!(report.kept_existing, 1);
    assert!(report.water_today.is_empty());

    let today = pool
        .decision_for_day(p.id, &NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
        .unwrap()
        .unwrap();
    assert!(!today.should_water);

    let tomorrow = pool
        .decision_for_day(p.id, &NaiveDate::from_ymd_opt(2025, 6, 2).unwrap())
        .unwrap()
        .unwrap();
    assert!(!tomorrow.should_water);
    assert_eq!(tomorrow.condition, "Moderate rain");

    assert_eq!(pool.decisions_for_plant(p.id).unwrap().len(), 2);

    let s = PlantLogic::status(&pool, p.id, noon(2025, 6, 2)).unwrap();
    assert_eq!(s.rain_detected, 2);
    assert_eq!(s.watering_avoided, 2);
}

#[test]
fn test_parse_forecast_fixture() {
    let body = fs::read_to_string(fixture("forecast.json")).unwrap();
    let days = parse_forecast(&body).unwrap();

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    assert_eq!(days[0].condition, "Soleado");
    assert_eq!(days[1].min_temp_c, 17.6);
}

#[test]
fn test_parse_forecast_rejects_garbage() {
    assert!(parse_forecast("{\"forecast\": {}}").is_err());
    assert!(parse_forecast("not json").is_err());
}

#[test]
fn test_cli_weather_check_from_file() {
    let db_path = setup_test_db("weather_check_file");
    init_db_with_plants(&db_path);

    plc()
        .args([
            "--db",
            &db_path,
            "weather",
            "check",
            "--from-file",
            &fixture("forecast.json"),
        ])
        .assert()
        .success()
        .stdout(contains("Good day to water"))
        .stdout(contains("4 decision(s) stored"));

    plc()
        .args(["--db", &db_path, "weather", "history", "--plant", "1"])
        .assert()
        .success()
        .stdout(contains("2025-06-01"))
        .stdout(contains("2025-06-02"))
        .stdout(contains("Lluvia moderada"));

    // second run keeps tomorrow's decisions
    plc()
        .args([
            "--db",
            &db_path,
            "weather",
            "check",
            "--from-file",
            &fixture("forecast.json"),
        ])
        .assert()
        .success()
        .stdout(contains("2 decision(s) stored, 2 already planned"));
}

#[test]
fn test_cli_weather_cold_alert() {
    let db_path = setup_test_db("weather_cold_alert");
    init_db_with_plants(&db_path);

    plc()
        .args([
            "--db",
            &db_path,
            "weather",
            "check",
            "--plant",
            "2",
            "--from-file",
            &fixture("forecast_cold.json"),
        ])
        .assert()
        .success()
        .stdout(contains("Cold night expected"))
        .stdout(contains("1 decision(s) stored"));

    plc()
        .args(["--db", &db_path, "stats", "2"])
        .assert()
        .success()
        .stdout(contains("rainy days   : 1"));
}

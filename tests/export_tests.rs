use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_plants, plc, setup_test_db, temp_out};

fn add_journal(db_path: &str) {
    plc()
        .args(["--db", db_path, "note", "1", "--height", "40", "--date", "2025-03-10"])
        .assert()
        .success();
    plc()
        .args(["--db", db_path, "water", "1", "--note", "weekly"])
        .assert()
        .success();
    plc()
        .args(["--db", db_path, "note", "2", "--note", "pinched flowers"])
        .assert()
        .success();
}

#[test]
fn test_export_csv_all_plants() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_plants(&db_path);
    add_journal(&db_path);
    let out = temp_out("export_csv_all", "csv");

    plc()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "log_id,plant_id,plant_name,logged_at,status,watered,height_cm,fertilizer_type,fertilizer_dose,note"
    );
    assert_eq!(lines.count(), 3);
    assert!(content.contains("GROWTH"));
    assert!(content.contains("weekly"));
    assert!(content.contains("pinched flowers"));
}

#[test]
fn test_export_json_single_plant() {
    let db_path = setup_test_db("export_json_one");
    init_db_with_plants(&db_path);
    add_journal(&db_path);
    let out = temp_out("export_json_one", "json");

    plc()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--plant", "1",
        ])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let plants = value.as_array().unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0]["plant"]["name"], "Monstera");
    assert_eq!(plants[0]["summary"]["health"], "healthy");
    assert_eq!(plants[0]["summary"]["current_height_cm"], 40.0);
    assert_eq!(plants[0]["logs"].as_array().unwrap().len(), 2);
    assert_eq!(plants[0]["logs"][1]["status"], "WATERING");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_plants(&db_path);
    add_journal(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    plc()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    plc()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("log_id"));
}

#[test]
fn test_export_unknown_plant() {
    let db_path = setup_test_db("export_unknown");
    init_db_with_plants(&db_path);
    let out = temp_out("export_unknown", "json");

    plc()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--plant", "9"])
        .assert()
        .failure()
        .stderr(contains("Plant not found: 9"));
}

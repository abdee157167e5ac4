#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use plantlog::db::initialize::init_db;
use plantlog::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plc() -> Command {
    cargo_bin_cmd!("plantlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_plantlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path of a file under tests/fixtures
pub fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path.to_string_lossy().to_string()
}

/// Init DB via CLI and add two plants: #1 Monstera, #2 Basil
pub fn init_db_with_plants(db_path: &str) {
    plc()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    plc()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Monstera",
            "--type",
            "Monstera deliciosa",
            "--planted",
            "2025-03-01",
            "--interval",
            "7",
        ])
        .assert()
        .success();

    plc()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Basil",
            "--type",
            "Ocimum basilicum",
            "--planted",
            "2025-04-10",
            "--interval",
            "2",
        ])
        .assert()
        .success();
}

/// Fresh in-memory store with the full schema
pub fn memory_store() -> DbPool {
    let pool = DbPool::open_in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

/// Local instant; noon keeps every test away from DST edges
pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
    at(y, m, d, 12)
}

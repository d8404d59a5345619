#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklog")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing database and session file.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.session", db_path)).ok();
    db_path
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema and open a session for a fresh account.
pub fn init_and_register(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db",
        db_path,
        "--test",
        "register",
        "--email",
        "worker@example.com",
        "--name",
        "Worker",
        "--password",
        "secret1",
    ])
    .assert()
    .success();
}

/// Add one entry on the given date: 09:00-17:30, 30 min break, rate 200.
pub fn add_standard_entry(db_path: &str, date: &str) {
    wl().args([
        "--db",
        db_path,
        "--test",
        "add",
        "--date",
        date,
        "--event",
        "Conference",
        "--place",
        "Prague",
        "--desc",
        "Stage setup",
        "--start",
        "09:00",
        "--end",
        "17:30",
        "--break",
        "30",
        "--rate",
        "200",
        "--signature-data",
        "c2lnbmF0dXJl",
    ])
    .assert()
    .success();
}

/// Initialize DB, register and add a small dataset useful for many tests.
pub fn init_db_with_entries(db_path: &str) {
    init_and_register(db_path);
    add_standard_entry(db_path, "2025-09-01");
    add_standard_entry(db_path, "2025-09-15");
}

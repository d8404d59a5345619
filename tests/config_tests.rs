use predicates::str::contains;

mod common;
use common::{setup_test_db, wl};

#[test]
fn test_init_reports_database_path() {
    let db = setup_test_db("config_init");

    wl().args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"));
}

#[test]
fn test_print_config_shows_defaults() {
    let db = setup_test_db("config_print");

    wl().args(["--db", &db, "--test", "init"]).assert().success();

    wl().args(["--db", &db, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("language: en"))
        .stdout(contains("currency: Kč"));
}

#[test]
fn test_set_lang_accepts_supported_codes() {
    let db = setup_test_db("config_set_lang");

    wl().args(["--db", &db, "--test", "config", "--set-lang", "cs"])
        .assert()
        .success()
        .stdout(contains("'cs'"));
}

#[test]
fn test_set_lang_rejects_unknown_code() {
    let db = setup_test_db("config_bad_lang");

    wl().args(["--db", &db, "--test", "config", "--set-lang", "de"])
        .assert()
        .failure()
        .stderr(contains("Invalid language"));
}

#[test]
fn test_lang_override_rejects_unknown_code() {
    let db = setup_test_db("config_bad_override");

    wl().args(["--db", &db, "--test", "--lang", "xx", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid language"));
}

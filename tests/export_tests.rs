use std::fs;
use std::io::Read;

use predicates::str::contains;

mod common;
use common::{init_db_with_entries, setup_test_db, temp_out, wl};

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_export_csv_localized_headers_and_rows() {
    let db = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Date,Event Name,Event Location"));
    assert!(content.contains("09/01/2025"));
    assert!(content.contains("Conference"));
    assert!(content.contains("1600.00"));
}

#[test]
fn test_export_csv_czech_headers_and_dates() {
    let db = setup_test_db("export_csv_cs");
    let out = temp_out("export_csv_cs", "csv");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "--lang", "cs", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Datum"));
    assert!(content.contains("01.09.2025"));
    // derived decimals stay canonical in exports
    assert!(content.contains("1600.00"));
}

#[test]
fn test_export_json_content() {
    let db = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["event_name"], "Conference");
    assert_eq!(rows[0]["total_hours"], "8.00");
    assert_eq!(rows[0]["total_amount"], "1600.00");
    assert_eq!(rows[0]["break_minutes"], 30);
}

#[test]
fn test_export_xlsx_creates_workbook() {
    let db = setup_test_db("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).unwrap();
    // XLSX is a zip archive
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf_timesheet() {
    let db = setup_test_db("export_pdf");
    let out = temp_out("export_pdf", "pdf");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "pdf", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("PDF"));

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_export_pdf_transcodes_czech_text() {
    let db = setup_test_db("export_pdf_czech");
    let out = temp_out("export_pdf_czech", "pdf");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "pdf", "--file", &out,
    ])
    .assert()
    .success();

    let bytes = fs::read(&out).unwrap();

    // title in the font's single-byte encoding (Ý = 0xDD, Á = 0xC1),
    // whether the string lands literally or hex-encoded
    let title: &[u8] = b"V\xDDKAZ PR\xC1CE";
    let upper: String = title.iter().map(|b| format!("{:02X}", b)).collect();
    let lower = upper.to_lowercase();
    assert!(
        contains_subslice(&bytes, title)
            || contains_subslice(&bytes, upper.as_bytes())
            || contains_subslice(&bytes, lower.as_bytes())
    );

    // no raw UTF-8 left in the content streams
    assert!(!contains_subslice(&bytes, "VÝKAZ".as_bytes()));

    // the Czech glyphs missing from WinAnsi are declared on the font
    assert!(contains_subslice(&bytes, b"WinAnsiEncoding"));
    assert!(contains_subslice(&bytes, b"/ccaron"));
    assert!(contains_subslice(&bytes, b"/rcaron"));
}

#[test]
fn test_export_xlsx_keeps_break_minutes_whole() {
    let db = setup_test_db("export_xlsx_break");
    let out = temp_out("export_xlsx_break", "xlsx");
    init_db_with_entries(&db);

    wl().args([
        "--db", &db, "--test", "export", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success();

    let file = fs::File::open(&out).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let mut sheet = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut sheet)
        .unwrap();

    // break minutes (column G) land as a whole number and do not share
    // the two-decimal style of the hours column (I)
    assert!(sheet.contains("<v>30</v>"));
    assert_ne!(cell_style(&sheet, "G2"), cell_style(&sheet, "I2"));

    let mut styles = String::new();
    archive
        .by_name("xl/styles.xml")
        .unwrap()
        .read_to_string(&mut styles)
        .unwrap();
    assert!(styles.contains(r#"formatCode="0.00""#));
}

fn cell_style(sheet: &str, cell: &str) -> String {
    let marker = format!(r#"r="{cell}" s=""#);
    let start = sheet.find(&marker).map(|i| i + marker.len()).unwrap();
    sheet[start..].split('"').next().unwrap().to_string()
}

#[test]
fn test_export_respects_period() {
    let db = setup_test_db("export_period");
    let out = temp_out("export_period", "csv");
    init_db_with_entries(&db);

    wl().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--period",
        "2025-09-01",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("09/01/2025"));
    assert!(!content.contains("09/15/2025"));
}

#[test]
fn test_export_empty_period_warns() {
    let db = setup_test_db("export_empty");
    let out = temp_out("export_empty", "csv");
    init_db_with_entries(&db);

    wl().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--period",
        "2024",
    ])
    .assert()
    .success()
    .stdout(contains("No work entries found"));

    // the file is still written, headers only
    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Date,"));
    assert!(!content.contains("Conference"));
}

#[test]
fn test_export_requires_login() {
    let db = setup_test_db("export_no_session");
    let out = temp_out("export_no_session", "csv");

    wl().args(["--db", &db, "--test", "init"]).assert().success();

    wl().args([
        "--db", &db, "--test", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("Not logged in"));
}

use chrono::NaiveDate;
use worklog::core::validate::{
    is_valid_email, validate_draft, validate_login, validate_registration,
};
use worklog::errors::AppError;
use worklog::models::work_entry::WorkEntryDraft;

fn valid_draft() -> WorkEntryDraft {
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    WorkEntryDraft {
        date,
        event_name: "Conference".to_string(),
        event_location: "Prague".to_string(),
        description: "Stage setup".to_string(),
        start_time: Some(date.and_hms_opt(9, 0, 0).unwrap()),
        end_time: Some(date.and_hms_opt(17, 30, 0).unwrap()),
        break_minutes: 30,
        hourly_rate: 200.0,
        total_hours: 8.0,
        total_amount: 1600.0,
        signature: "c2ln".to_string(),
    }
}

fn field_of(err: AppError) -> &'static str {
    match err {
        AppError::Validation { field, .. } => field,
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_valid_draft_passes() {
    assert!(validate_draft(&valid_draft()).is_ok());
}

#[test]
fn test_empty_texts_are_rejected() {
    let mut d = valid_draft();
    d.event_name = String::new();
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "event name");

    let mut d = valid_draft();
    d.description = "   ".to_string();
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "description");
}

#[test]
fn test_end_must_be_after_start() {
    let mut d = valid_draft();
    d.end_time = d.start_time;
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "end time");
}

#[test]
fn test_missing_times_are_rejected() {
    let mut d = valid_draft();
    d.start_time = None;
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "start time");
}

#[test]
fn test_rate_must_be_positive() {
    let mut d = valid_draft();
    d.hourly_rate = 0.0;
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "hourly rate");
}

#[test]
fn test_signature_required() {
    let mut d = valid_draft();
    d.signature = String::new();
    assert_eq!(field_of(validate_draft(&d).unwrap_err()), "signature");
}

#[test]
fn test_registration_password_length_boundary() {
    // five characters rejected, six accepted
    assert!(validate_registration("a@b.cz", "12345", "Worker").is_err());
    assert!(validate_registration("a@b.cz", "123456", "Worker").is_ok());
}

#[test]
fn test_email_shape() {
    assert!(is_valid_email("worker@example.com"));
    assert!(!is_valid_email("worker@example"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("a b@example.com"));
}

#[test]
fn test_login_requires_password() {
    assert!(validate_login("worker@example.com", "").is_err());
    assert!(validate_login("worker@example.com", "x").is_ok());
}

//! Boundary validation for submissions and account operations.
//! A draft that fails here never reaches the store.

use crate::errors::{AppError, AppResult};
use crate::models::work_entry::WorkEntryDraft;
use regex::Regex;
use std::sync::OnceLock;

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

fn invalid(field: &'static str, reason: &str) -> AppError {
    AppError::Validation {
        field,
        reason: reason.to_string(),
    }
}

/// Validate a work-entry draft before it is handed to the store.
///
/// Required: non-empty event name, location, description and signature,
/// both timestamps present with start < end, break >= 0, rate > 0.
pub fn validate_draft(draft: &WorkEntryDraft) -> AppResult<()> {
    if draft.event_name.trim().is_empty() {
        return Err(invalid("event name", "must not be empty"));
    }
    if draft.event_location.trim().is_empty() {
        return Err(invalid("event location", "must not be empty"));
    }
    if draft.description.trim().is_empty() {
        return Err(invalid("description", "must not be empty"));
    }

    let (start, end) = match (draft.start_time, draft.end_time) {
        (Some(s), Some(e)) => (s, e),
        (None, _) => return Err(invalid("start time", "is required")),
        (_, None) => return Err(invalid("end time", "is required")),
    };
    if end <= start {
        return Err(invalid("end time", "must be after the start time"));
    }

    if draft.break_minutes < 0 {
        return Err(invalid("break duration", "must not be negative"));
    }
    if draft.hourly_rate <= 0.0 {
        return Err(invalid("hourly rate", "must be positive"));
    }
    if draft.signature.is_empty() {
        return Err(invalid("signature", "is required"));
    }

    Ok(())
}

/// Registration boundary: well-formed email, password of at least six
/// characters, non-empty name.
pub fn validate_registration(email: &str, password: &str, name: &str) -> AppResult<()> {
    if !is_valid_email(email) {
        return Err(invalid("email", "must be a well-formed address"));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid("password", "must be at least 6 characters"));
    }
    if name.trim().is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    Ok(())
}

pub fn validate_login(email: &str, password: &str) -> AppResult<()> {
    if !is_valid_email(email) {
        return Err(invalid("email", "must be a well-formed address"));
    }
    if password.is_empty() {
        return Err(invalid("password", "must not be empty"));
    }
    Ok(())
}

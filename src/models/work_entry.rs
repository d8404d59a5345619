use crate::utils::date;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A persisted work entry. Immutable once stored: there are no update or
/// delete operations on entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkEntry {
    pub id: i64,                  // ⇔ work_entries.id
    pub user_id: i64,             // ⇔ work_entries.user_id
    pub date: NaiveDate,          // ⇔ work_entries.date (TEXT "YYYY-MM-DD")
    pub event_name: String,       // ⇔ work_entries.event_name
    pub event_location: String,   // ⇔ work_entries.event_location
    pub description: String,      // ⇔ work_entries.description
    pub start_time: NaiveDateTime, // ⇔ work_entries.start_time (TEXT "YYYY-MM-DD HH:MM")
    pub end_time: NaiveDateTime,  // ⇔ work_entries.end_time
    pub break_minutes: i64,       // ⇔ work_entries.break_minutes (INT, whole minutes)
    pub hourly_rate: f64,         // ⇔ work_entries.hourly_rate (REAL, > 0)
    pub total_hours: f64,         // ⇔ work_entries.total_hours (derived, 2 decimals)
    pub total_amount: f64,        // ⇔ work_entries.total_amount (derived, 2 decimals)
    pub signature: String,        // ⇔ work_entries.signature (opaque encoded image)
    pub created_at: String,       // ⇔ work_entries.created_at (ISO8601)
}

/// The in-progress entry held by the form before submission.
///
/// The four derivation inputs (start, end, break, rate) drive
/// `total_hours`/`total_amount`; those two are never edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkEntryDraft {
    pub date: NaiveDate,
    pub event_name: String,
    pub event_location: String,
    pub description: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub break_minutes: i64,
    pub hourly_rate: f64,
    pub total_hours: f64,
    pub total_amount: f64,
    pub signature: String,
}

impl Default for WorkEntryDraft {
    fn default() -> Self {
        Self {
            date: date::today(),
            event_name: String::new(),
            event_location: String::new(),
            description: String::new(),
            start_time: None,
            end_time: None,
            break_minutes: 0,
            hourly_rate: 0.0,
            total_hours: 0.0,
            total_amount: 0.0,
            signature: String::new(),
        }
    }
}

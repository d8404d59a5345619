//! Time utilities: duration computation and the storage timestamp format.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format for timestamps in the database.
pub const DATETIME_STORAGE_FMT: &str = "%Y-%m-%d %H:%M";

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Parse a timestamp in the storage format ("YYYY-MM-DD HH:MM").
pub fn parse_storage_datetime(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_STORAGE_FMT)
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}

pub fn format_storage_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_STORAGE_FMT).to_string()
}

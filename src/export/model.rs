// src/export/model.rs

use crate::locale::{self, Language, labels};
use crate::models::work_entry::WorkEntry;
use serde::Serialize;

/// Flat row for exporting work entries. Dates and times are rendered in
/// the active display language; the derived decimals stay canonical
/// (two digits, dot separator) whatever the language.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub date: String,
    pub event_name: String,
    pub event_location: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: i64,
    pub hourly_rate: String,
    pub total_hours: String,
    pub total_amount: String,
}

impl EntryExport {
    pub fn from_entry(e: &WorkEntry, lang: Language) -> Self {
        Self {
            date: locale::format_date(e.date, lang),
            event_name: e.event_name.clone(),
            event_location: e.event_location.clone(),
            description: e.description.clone(),
            start_time: e.start_time.format("%H:%M").to_string(),
            end_time: e.end_time.format("%H:%M").to_string(),
            break_minutes: e.break_minutes,
            hourly_rate: format!("{:.2}", e.hourly_rate),
            total_hours: format!("{:.2}", e.total_hours),
            total_amount: format!("{:.2}", e.total_amount),
        }
    }
}

/// Header row for CSV / XLSX, in the active display language.
pub(crate) fn get_headers(lang: Language) -> Vec<&'static str> {
    let l = &labels(lang).form;
    vec![
        l.date,
        l.event_name,
        l.event_location,
        l.description,
        l.start_time,
        l.end_time,
        l.break_duration,
        l.hourly_rate,
        l.total_hours,
        l.total_amount,
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.event_name.clone(),
        e.event_location.clone(),
        e.description.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        e.break_minutes.to_string(),
        e.hourly_rate.clone(),
        e.total_hours.clone(),
        e.total_amount.clone(),
    ]
}

//! Aggregated statistics over a user's work entries.

use crate::core::calculator::round2;
use crate::models::work_entry::WorkEntry;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct DayStat {
    pub date: NaiveDate,
    pub hours: f64,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_hours: f64,
    pub total_amount: f64,
    pub days: Vec<DayStat>,
}

/// Sum hours and amount over all entries and bucket them per day,
/// oldest day first.
pub fn summarize(entries: &[WorkEntry]) -> StatsSummary {
    let mut per_day: BTreeMap<NaiveDate, (f64, f64)> = BTreeMap::new();

    for e in entries {
        let day = per_day.entry(e.date).or_insert((0.0, 0.0));
        day.0 += e.total_hours;
        day.1 += e.total_amount;
    }

    let days: Vec<DayStat> = per_day
        .into_iter()
        .map(|(date, (hours, amount))| DayStat {
            date,
            hours: round2(hours),
            amount: round2(amount),
        })
        .collect();

    let total_hours = round2(entries.iter().map(|e| e.total_hours).sum());
    let total_amount = round2(entries.iter().map(|e| e.total_amount).sum());

    StatsSummary {
        total_hours,
        total_amount,
        days,
    }
}

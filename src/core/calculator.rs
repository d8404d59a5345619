//! Derived-value calculator for work entries.
//!
//! `total_hours` and `total_amount` are pure functions of the four inputs
//! (start, end, break, rate) and always carry exactly two decimals,
//! independent of the display language.

use crate::utils::time::minutes_between;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub hours: f64,
    pub amount: f64,
}

/// Round to two decimals, half away from zero.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Derive total hours and total amount from the raw time inputs.
///
/// Returns `None` while either timestamp is absent: the entry is not yet
/// computable and the caller keeps its prior derived values. A negative
/// worked interval (end before start, or break longer than the elapsed
/// time) clamps to zero so a derived value is never negative.
pub fn compute_totals(
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    break_minutes: i64,
    hourly_rate: f64,
) -> Option<Totals> {
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s, e),
        _ => return None,
    };

    let elapsed = minutes_between(start, end);
    let worked = (elapsed - break_minutes).max(0);

    let hours = round2(worked as f64 / 60.0);
    let amount = round2(hours * hourly_rate);

    Some(Totals { hours, amount })
}

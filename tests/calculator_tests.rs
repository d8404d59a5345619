use chrono::{NaiveDate, NaiveDateTime};
use worklog::core::calculator::{compute_totals, round2};

fn dt(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_full_day_with_break() {
    // 09:00-17:30 minus 30 min break at 200/h -> 480 worked minutes
    let t = compute_totals(Some(dt(9, 0)), Some(dt(17, 30)), 30, 200.0).unwrap();
    assert_eq!(t.hours, 8.0);
    assert_eq!(t.amount, 1600.0);
}

#[test]
fn test_break_longer_than_interval_clamps_to_zero() {
    // 15 elapsed minutes minus a 30 min break would be negative
    let t = compute_totals(Some(dt(9, 0)), Some(dt(9, 15)), 30, 200.0).unwrap();
    assert_eq!(t.hours, 0.0);
    assert_eq!(t.amount, 0.0);
}

#[test]
fn test_end_before_start_clamps_to_zero() {
    let t = compute_totals(Some(dt(17, 0)), Some(dt(9, 0)), 0, 150.0).unwrap();
    assert_eq!(t.hours, 0.0);
    assert_eq!(t.amount, 0.0);
}

#[test]
fn test_missing_time_is_not_computable() {
    assert!(compute_totals(None, Some(dt(17, 0)), 0, 100.0).is_none());
    assert!(compute_totals(Some(dt(9, 0)), None, 0, 100.0).is_none());
    assert!(compute_totals(None, None, 0, 100.0).is_none());
}

#[test]
fn test_rounds_to_two_decimals() {
    // 100 worked minutes = 1.666... hours -> 1.67
    let t = compute_totals(Some(dt(9, 0)), Some(dt(10, 40)), 0, 100.0).unwrap();
    assert_eq!(t.hours, 1.67);
    assert_eq!(t.amount, 167.0);
}

#[test]
fn test_zero_break_full_hours() {
    let t = compute_totals(Some(dt(8, 0)), Some(dt(16, 0)), 0, 250.0).unwrap();
    assert_eq!(t.hours, 8.0);
    assert_eq!(t.amount, 2000.0);
}

#[test]
fn test_round2_half_away_from_zero() {
    // 0.125 is exact in binary, so the half case is really exercised
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(1.6666667), 1.67);
    assert_eq!(round2(8.0), 8.0);
}

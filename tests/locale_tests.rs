use chrono::{NaiveDate, NaiveTime};
use worklog::locale::{
    FieldKind, FieldValue, Language, format_date, format_datetime, format_decimal, format_value,
    labels, parse_date, parse_datetime, parse_decimal, parse_value,
};

#[test]
fn test_date_conventions_per_language() {
    let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    assert_eq!(format_date(d, Language::En), "09/01/2025");
    assert_eq!(format_date(d, Language::Ru), "01.09.2025");
    assert_eq!(format_date(d, Language::Uk), "01.09.2025");
    assert_eq!(format_date(d, Language::Cs), "01.09.2025");
}

#[test]
fn test_decimal_conventions_per_language() {
    assert_eq!(format_decimal(1600.0, Language::En), "1600.00");
    assert_eq!(format_decimal(1600.0, Language::Cs), "1600,00");
    assert_eq!(format_decimal(8.5, Language::Ru), "8,50");
}

#[test]
fn test_round_trip_dates_all_languages() {
    let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    for lang in Language::all() {
        let shown = format_date(d, lang);
        assert_eq!(parse_date(&shown, lang).unwrap(), d, "lang {:?}", lang);
    }
}

#[test]
fn test_round_trip_datetimes_all_languages() {
    let dt = NaiveDate::from_ymd_opt(2025, 2, 7)
        .unwrap()
        .and_hms_opt(17, 30, 0)
        .unwrap();
    for lang in Language::all() {
        let shown = format_datetime(dt, lang);
        assert_eq!(parse_datetime(&shown, lang).unwrap(), dt, "lang {:?}", lang);
    }
}

#[test]
fn test_round_trip_decimals_all_languages() {
    // representable = already carrying two decimals
    for v in [0.0, 8.0, 8.5, 1600.25, 199.99] {
        for lang in Language::all() {
            let shown = format_decimal(v, lang);
            assert_eq!(parse_decimal(&shown, lang).unwrap(), v, "lang {:?}", lang);
        }
    }
}

#[test]
fn test_round_trip_generic_values() {
    let values = [
        FieldValue::Date(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()),
        FieldValue::Time(NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
        FieldValue::Decimal(250.75),
    ];
    for v in values {
        for lang in Language::all() {
            let shown = format_value(&v, lang);
            let back = parse_value(&shown, v.kind(), lang).unwrap();
            assert_eq!(back, v, "lang {:?}", lang);
        }
    }
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_date("not-a-date", Language::En).is_err());
    assert!(parse_decimal("abc", Language::Cs).is_err());
    assert!(parse_value("25:99", FieldKind::Time, Language::En).is_err());
}

#[test]
fn test_language_codes() {
    for lang in Language::all() {
        assert_eq!(Language::from_code(lang.as_code()), Some(lang));
    }
    assert_eq!(Language::from_code("de"), None);
}

#[test]
fn test_labels_canonical_shape() {
    // every language fills the same canonical groups
    for lang in Language::all() {
        let l = labels(lang);
        assert!(!l.form.total_hours.is_empty());
        assert!(!l.stats.by_day.is_empty());
        assert!(!l.auth.password.is_empty());
    }
    assert_eq!(labels(Language::Cs).stats.title, "Statistika");
    assert_eq!(labels(Language::En).form.total_amount, "Total Amount");
}

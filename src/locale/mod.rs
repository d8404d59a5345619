//! Locale-aware formatting adapter.
//!
//! Renders dates, timestamps and decimals following the active display
//! language and parses user input back into canonical values. For every
//! valid value `parse_value(format_value(v)) == v`. The adapter only
//! changes presentation: it never recomputes derived totals.

pub mod labels;

pub use labels::{Labels, labels};

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ru,
    Uk,
    Cs,
}

impl Language {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Self::En),
            "ru" => Some(Self::Ru),
            "uk" => Some(Self::Uk),
            "cs" => Some(Self::Cs),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uk => "uk",
            Language::Cs => "cs",
        }
    }

    pub fn all() -> [Language; 4] {
        [Language::En, Language::Ru, Language::Uk, Language::Cs]
    }

    /// chrono pattern for calendar dates in this language.
    fn date_pattern(&self) -> &'static str {
        match self {
            Language::En => "%m/%d/%Y",
            Language::Ru | Language::Uk | Language::Cs => "%d.%m.%Y",
        }
    }

    /// Decimal separator used when rendering numbers.
    fn decimal_separator(&self) -> char {
        match self {
            Language::En => '.',
            Language::Ru | Language::Uk | Language::Cs => ',',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    DateTime,
    Time,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Decimal(f64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::DateTime(_) => FieldKind::DateTime,
            FieldValue::Time(_) => FieldKind::Time,
            FieldValue::Decimal(_) => FieldKind::Decimal,
        }
    }
}

pub fn format_value(value: &FieldValue, lang: Language) -> String {
    match value {
        FieldValue::Date(d) => format_date(*d, lang),
        FieldValue::DateTime(dt) => format_datetime(*dt, lang),
        FieldValue::Time(t) => t.format("%H:%M").to_string(),
        FieldValue::Decimal(v) => format_decimal(*v, lang),
    }
}

pub fn parse_value(text: &str, kind: FieldKind, lang: Language) -> AppResult<FieldValue> {
    match kind {
        FieldKind::Date => parse_date(text, lang).map(FieldValue::Date),
        FieldKind::DateTime => parse_datetime(text, lang).map(FieldValue::DateTime),
        FieldKind::Time => NaiveTime::parse_from_str(text, "%H:%M")
            .map(FieldValue::Time)
            .map_err(|_| AppError::InvalidTime(text.to_string())),
        FieldKind::Decimal => parse_decimal(text, lang).map(FieldValue::Decimal),
    }
}

pub fn format_date(d: NaiveDate, lang: Language) -> String {
    d.format(lang.date_pattern()).to_string()
}

pub fn parse_date(s: &str, lang: Language) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, lang.date_pattern())
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_datetime(dt: NaiveDateTime, lang: Language) -> String {
    let pattern = format!("{} %H:%M", lang.date_pattern());
    dt.format(&pattern).to_string()
}

pub fn parse_datetime(s: &str, lang: Language) -> AppResult<NaiveDateTime> {
    let pattern = format!("{} %H:%M", lang.date_pattern());
    NaiveDateTime::parse_from_str(s, &pattern).map_err(|_| AppError::InvalidTime(s.to_string()))
}

/// Two-decimal rendering with the language's decimal separator.
pub fn format_decimal(v: f64, lang: Language) -> String {
    let plain = format!("{:.2}", v);
    match lang.decimal_separator() {
        '.' => plain,
        sep => plain.replace('.', &sep.to_string()),
    }
}

pub fn parse_decimal(s: &str, lang: Language) -> AppResult<f64> {
    let normalized = match lang.decimal_separator() {
        '.' => s.to_string(),
        sep => s.replace(sep, "."),
    };
    normalized
        .parse::<f64>()
        .map_err(|_| AppError::InvalidNumber(s.to_string()))
}

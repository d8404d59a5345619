use crate::auth::session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::{EntryForm, FieldPatch, SubmitOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::locale::{self, FieldKind, FieldValue, Language, labels};
use crate::ui::messages::success;
use crate::utils::date;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fs;

/// Record one work entry through the form container.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        event,
        place,
        desc,
        start,
        end,
        break_minutes,
        rate,
        signature_file,
        signature_data,
    } = cmd
    {
        let lang = cfg.active_language();

        //
        // 1. Resolve the entry date (today when omitted)
        //
        let entry_date = match date {
            Some(s) => parse_entry_date(s, lang)?,
            None => date::today(),
        };

        //
        // 2. Parse times (HH:MM on the entry date, or a full datetime)
        //
        let start_parsed = parse_entry_time(start.as_deref(), entry_date, lang)?;
        let mut end_parsed = parse_entry_time(end.as_deref(), entry_date, lang)?;

        // A plain HH:MM end at or before the start means the shift runs
        // past midnight; roll it onto the next day.
        if let (Some(s), Some(e)) = (start_parsed, end_parsed)
            && e <= s
            && end.as_deref().is_some_and(is_plain_time)
        {
            end_parsed = Some(e + Duration::days(1));
        }

        //
        // 3. Parse the hourly rate in the active language's number format
        //
        let rate_parsed = match rate {
            Some(s) => Some(locale::parse_decimal(s, lang)?),
            None => None,
        };

        //
        // 4. Resolve the signature payload (opaque once encoded)
        //
        let signature = resolve_signature(signature_file.as_deref(), signature_data.as_deref())?;

        //
        // 5. Fill the form; derived totals update as the inputs land
        //
        let mut form = EntryForm::new();
        form.set_field(FieldPatch::Date(entry_date));
        if let Some(v) = event {
            form.set_field(FieldPatch::EventName(v.clone()));
        }
        if let Some(v) = place {
            form.set_field(FieldPatch::EventLocation(v.clone()));
        }
        if let Some(v) = desc {
            form.set_field(FieldPatch::Description(v.clone()));
        }
        if let Some(t) = start_parsed {
            form.set_field(FieldPatch::StartTime(t));
        }
        if let Some(t) = end_parsed {
            form.set_field(FieldPatch::EndTime(t));
        }
        form.set_field(FieldPatch::BreakMinutes(*break_minutes));
        if let Some(r) = rate_parsed {
            form.set_field(FieldPatch::HourlyRate(r));
        }
        if let Some(s) = signature {
            form.set_field(FieldPatch::Signature(s));
        }

        //
        // 6. Submit to the store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let user = session::current_user(&mut pool)?;

        match form.submit(&mut pool, user.id)? {
            SubmitOutcome::Saved(entry) => {
                let l = labels(lang);
                success(format!(
                    "{} — {}: {}, {}: {} {}",
                    l.form.submit,
                    l.form.total_hours,
                    locale::format_decimal(entry.total_hours, lang),
                    l.form.total_amount,
                    locale::format_decimal(entry.total_amount, lang),
                    cfg.currency,
                ));
            }
            SubmitOutcome::AlreadyPending => {}
        }
    }

    Ok(())
}

/// Accept the canonical YYYY-MM-DD shape first, then the active
/// language's date format.
fn parse_entry_date(s: &str, lang: Language) -> AppResult<NaiveDate> {
    if let Some(d) = date::parse_date(s) {
        return Ok(d);
    }
    locale::parse_date(s, lang)
}

fn is_plain_time(s: &str) -> bool {
    NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

/// HH:MM binds to the entry date; a full datetime in the active
/// language's format may land on any day.
fn parse_entry_time(
    input: Option<&str>,
    entry_date: NaiveDate,
    lang: Language,
) -> AppResult<Option<NaiveDateTime>> {
    let Some(s) = input else {
        return Ok(None);
    };
    if let Ok(FieldValue::Time(t)) = locale::parse_value(s, FieldKind::Time, lang) {
        return Ok(Some(entry_date.and_time(t)));
    }
    match locale::parse_value(s, FieldKind::DateTime, lang)? {
        FieldValue::DateTime(dt) => Ok(Some(dt)),
        _ => Err(AppError::InvalidTime(s.to_string())),
    }
}

fn resolve_signature(
    file: Option<&str>,
    data: Option<&str>,
) -> AppResult<Option<String>> {
    if let Some(path) = file {
        let bytes = fs::read(path)?;
        return Ok(Some(BASE64.encode(bytes)));
    }
    Ok(data.map(|s| s.to_string()))
}

use crate::core::form::EntryStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::models::work_entry::{WorkEntry, WorkEntryDraft};
use crate::utils::time::{format_storage_datetime, parse_storage_datetime};
use chrono::{Local, NaiveDate};
use rusqlite::{params, Connection, Result, Row};

// ---------------------------
// Users & sessions
// ---------------------------

pub fn insert_user(conn: &Connection, email: &str, password_hash: &str, name: &str) -> AppResult<User> {
    let created_at = Local::now().to_rfc3339();

    let res = conn.execute(
        "INSERT INTO users (email, password_hash, name, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![email, password_hash, name, created_at],
    );

    match res {
        Ok(_) => Ok(User {
            id: conn.last_insert_rowid(),
            email: email.to_string(),
            name: name.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        }),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::EmailTaken(email.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT id, email, password_hash, name, created_at FROM users WHERE email = ?1",
    )?;
    let mut rows = stmt.query_map([email], map_user_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

fn map_user_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get("id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_session(conn: &Connection, token: &str, user_id: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions (token, user_id, created_at) VALUES (?1, ?2, ?3)",
        params![token, user_id, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn delete_session(conn: &Connection, token: &str) -> AppResult<()> {
    conn.execute("DELETE FROM sessions WHERE token = ?1", [token])?;
    Ok(())
}

/// Revoke all of a user's sessions, so stale tokens from earlier logins
/// cannot pile up or stay valid.
pub fn delete_user_sessions(conn: &Connection, user_id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM sessions WHERE user_id = ?1", [user_id])?;
    Ok(())
}

pub fn find_session_user(conn: &Connection, token: &str) -> AppResult<Option<User>> {
    let mut stmt = conn.prepare(
        "SELECT u.id, u.email, u.password_hash, u.name, u.created_at
         FROM sessions s JOIN users u ON u.id = s.user_id
         WHERE s.token = ?1",
    )?;
    let mut rows = stmt.query_map([token], map_user_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

// ---------------------------
// Work entries
// ---------------------------

pub fn insert_entry(conn: &Connection, user_id: i64, draft: &WorkEntryDraft) -> AppResult<WorkEntry> {
    let (start, end) = match (draft.start_time, draft.end_time) {
        (Some(s), Some(e)) => (s, e),
        _ => {
            return Err(AppError::Validation {
                field: "start time",
                reason: "is required".to_string(),
            });
        }
    };

    let created_at = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO work_entries
            (user_id, date, event_name, event_location, description,
             start_time, end_time, break_minutes, hourly_rate,
             total_hours, total_amount, signature, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            user_id,
            draft.date.format("%Y-%m-%d").to_string(),
            draft.event_name,
            draft.event_location,
            draft.description,
            format_storage_datetime(&start),
            format_storage_datetime(&end),
            draft.break_minutes,
            draft.hourly_rate,
            draft.total_hours,
            draft.total_amount,
            draft.signature,
            created_at,
        ],
    )?;

    Ok(WorkEntry {
        id: conn.last_insert_rowid(),
        user_id,
        date: draft.date,
        event_name: draft.event_name.clone(),
        event_location: draft.event_location.clone(),
        description: draft.description.clone(),
        start_time: start,
        end_time: end,
        break_minutes: draft.break_minutes,
        hourly_rate: draft.hourly_rate,
        total_hours: draft.total_hours,
        total_amount: draft.total_amount,
        signature: draft.signature.clone(),
        created_at,
    })
}

/// Load a user's entries, optionally restricted to an inclusive date range,
/// oldest first.
pub fn load_entries(
    pool: &mut DbPool,
    user_id: i64,
    range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WorkEntry>> {
    let mut out = Vec::new();

    match range {
        Some((from, to)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM work_entries
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC, start_time ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user_id,
                    from.format("%Y-%m-%d").to_string(),
                    to.format("%Y-%m-%d").to_string()
                ],
                map_entry_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM work_entries
                 WHERE user_id = ?1
                 ORDER BY date ASC, start_time ASC",
            )?;
            let rows = stmt.query_map([user_id], map_entry_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn map_entry_row(row: &Row) -> Result<WorkEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let start_str: String = row.get("start_time")?;
    let start_time = parse_storage_datetime(&start_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let end_str: String = row.get("end_time")?;
    let end_time = parse_storage_datetime(&end_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(WorkEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        event_name: row.get("event_name")?,
        event_location: row.get("event_location")?,
        description: row.get("description")?,
        start_time,
        end_time,
        break_minutes: row.get("break_minutes")?,
        hourly_rate: row.get("hourly_rate")?,
        total_hours: row.get("total_hours")?,
        total_amount: row.get("total_amount")?,
        signature: row.get("signature")?,
        created_at: row.get("created_at")?,
    })
}

impl EntryStore for DbPool {
    fn create_entry(&mut self, owner_id: i64, draft: &WorkEntryDraft) -> AppResult<WorkEntry> {
        insert_entry(&self.conn, owner_id, draft)
    }
}

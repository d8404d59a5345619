//! Schema creation and upgrades. Every function is idempotent so `init`
//! can run on both fresh and existing databases.

use rusqlite::{Connection, Result};

/// Create the `users` table.
fn create_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            name          TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `work_entries` table. Entries are append-only; the derived
/// columns are written once at submission and never recomputed in SQL.
fn create_work_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_entries (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER NOT NULL,
            date           TEXT NOT NULL,
            event_name     TEXT NOT NULL,
            event_location TEXT NOT NULL,
            description    TEXT NOT NULL,
            start_time     TEXT NOT NULL,
            end_time       TEXT NOT NULL,
            break_minutes  INTEGER NOT NULL DEFAULT 0,
            hourly_rate    REAL NOT NULL,
            total_hours    REAL NOT NULL,
            total_amount   REAL NOT NULL,
            signature      TEXT NOT NULL,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_entries_user_date
            ON work_entries(user_id, date);
        "#,
    )?;
    Ok(())
}

/// Create the `sessions` table (bearer tokens, revoked on logout).
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token      TEXT PRIMARY KEY,
            user_id    INTEGER NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    create_users_table(conn)?;
    create_work_entries_table(conn)?;
    create_sessions_table(conn)?;
    Ok(())
}

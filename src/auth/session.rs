//! Local session handling: the bearer token issued on register/login is
//! written next to the database file and resolved back to a user through
//! the sessions table on every authenticated command.

use crate::auth::{hash_password, new_token, verify_password};
use crate::core::validate::{validate_login, validate_registration};
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_session, delete_user_sessions, find_session_user, find_user_by_email, insert_session,
    insert_user,
};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use std::fs;
use std::path::PathBuf;

/// The token lives next to the database so test databases stay isolated.
pub fn session_file(db_path: &str) -> PathBuf {
    PathBuf::from(format!("{}.session", db_path))
}

fn store_token(db_path: &str, token: &str) -> AppResult<()> {
    fs::write(session_file(db_path), token)?;
    Ok(())
}

fn load_token(db_path: &str) -> Option<String> {
    let raw = fs::read_to_string(session_file(db_path)).ok()?;
    let token = raw.trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

fn clear_token(db_path: &str) {
    let _ = fs::remove_file(session_file(db_path));
}

/// Create an account and open a session for it.
pub fn register(pool: &mut DbPool, email: &str, password: &str, name: &str) -> AppResult<User> {
    validate_registration(email, password, name)?;

    let password_hash = hash_password(password)?;
    let user = insert_user(&pool.conn, email, &password_hash, name)?;

    open_session(pool, &user)?;
    Ok(user)
}

/// Verify credentials and open a session.
pub fn login(pool: &mut DbPool, email: &str, password: &str) -> AppResult<User> {
    validate_login(email, password)?;

    let user = find_user_by_email(&pool.conn, email)?.ok_or(AppError::InvalidCredentials)?;
    if !verify_password(password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    open_session(pool, &user)?;
    Ok(user)
}

// One active session per user: opening a new one revokes the others.
fn open_session(pool: &mut DbPool, user: &User) -> AppResult<()> {
    let token = new_token();
    delete_user_sessions(&pool.conn, user.id)?;
    insert_session(&pool.conn, &token, user.id)?;
    store_token(&pool.db_path, &token)?;
    Ok(())
}

/// Revoke the current token, if any.
pub fn logout(pool: &mut DbPool) -> AppResult<()> {
    if let Some(token) = load_token(&pool.db_path) {
        delete_session(&pool.conn, &token)?;
    }
    clear_token(&pool.db_path);
    Ok(())
}

/// Resolve the stored token to its user. The token is opaque: it either
/// maps to a session row or the caller must log in again.
pub fn current_user(pool: &mut DbPool) -> AppResult<User> {
    let token = load_token(&pool.db_path).ok_or(AppError::NotLoggedIn)?;
    find_session_user(&pool.conn, &token)?.ok_or(AppError::InvalidSession)
}

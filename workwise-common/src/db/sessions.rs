//! Bearer session storage
//!
//! The raw token only ever exists in the response to the client; the table
//! holds its SHA-256. Sessions expire after [`SESSION_TTL_DAYS`] and
//! expired rows are pruned whenever a new session is opened.

use chrono::Duration;
use sqlx::SqlitePool;
use tracing::debug;

use super::models::User;
use super::users;
use crate::auth::{generate_session_token, hash_session_token};
use crate::{time, Result};

pub const SESSION_TTL_DAYS: i64 = 30;

/// Open a session for `user_id` with the default lifetime, returning the raw token
pub async fn create_session(pool: &SqlitePool, user_id: i64) -> Result<String> {
    create_session_with_ttl(pool, user_id, Duration::days(SESSION_TTL_DAYS)).await
}

/// Open a session that stays valid for `ttl`
pub async fn create_session_with_ttl(
    pool: &SqlitePool,
    user_id: i64,
    ttl: Duration,
) -> Result<String> {
    prune_expired(pool).await?;

    let token = generate_session_token();
    let created_at = time::now();

    sqlx::query(
        "INSERT INTO sessions (token_hash, user_id, created_at, expires_at) VALUES (?, ?, ?, ?)",
    )
    .bind(hash_session_token(&token))
    .bind(user_id)
    .bind(time::to_db(created_at))
    .bind(time::to_db(created_at + ttl))
    .execute(pool)
    .await?;

    Ok(token)
}

/// Resolve a raw token to its user; expired sessions resolve to `None`
pub async fn find_user_by_token(pool: &SqlitePool, token: &str) -> Result<Option<User>> {
    let user_id: Option<i64> = sqlx::query_scalar(
        "SELECT user_id FROM sessions WHERE token_hash = ? AND expires_at > ?",
    )
    .bind(hash_session_token(token))
    .bind(time::to_db(time::now()))
    .fetch_optional(pool)
    .await?;

    match user_id {
        Some(id) => users::find_user(pool, id).await,
        None => Ok(None),
    }
}

/// Returns whether a session was removed
pub async fn delete_session(pool: &SqlitePool, token: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
        .bind(hash_session_token(token))
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every expired session, returning how many were removed
pub async fn prune_expired(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
        .bind(time::to_db(time::now()))
        .execute(pool)
        .await?;

    let removed = result.rows_affected();
    if removed > 0 {
        debug!("Pruned {} expired sessions", removed);
    }
    Ok(removed)
}

//! User account queries

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::{NewUser, ProfileUpdate, User, UserType};
use super::{decode_string_list, encode_string_list};
use crate::{time, Error, Result};

const USER_COLUMNS: &str = "id, first_name, last_name, email, user_type, barangay, city, bio, \
     skills, hourly_rate, portfolio_url, completion_rate, average_rating, marketing_emails, created_at";

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let user_type: String = row.get("user_type");
    let skills: String = row.get("skills");
    let created_at: String = row.get("created_at");

    Ok(User {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        user_type: user_type.parse::<UserType>()?,
        barangay: row.get("barangay"),
        city: row.get("city"),
        bio: row.get("bio"),
        skills: decode_string_list("skills", &skills)?,
        hourly_rate: row.get("hourly_rate"),
        portfolio_url: row.get("portfolio_url"),
        completion_rate: row.get("completion_rate"),
        average_rating: row.get("average_rating"),
        marketing_emails: row.get::<i64, _>("marketing_emails") != 0,
        created_at: time::from_db(&created_at)?,
    })
}

/// Insert a new account
///
/// Emails are compared case-insensitively; a duplicate yields [`Error::Conflict`].
pub async fn create_user(pool: &SqlitePool, new_user: &NewUser) -> Result<User> {
    let email = new_user.email.trim().to_lowercase();
    if email_exists(pool, &email).await? {
        return Err(Error::Conflict(format!("email {} is already registered", email)));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO users (
            first_name, last_name, email, password_hash,
            user_type, barangay, city, marketing_emails, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&email)
    .bind(&new_user.password_hash)
    .bind(new_user.user_type.as_str())
    .bind(&new_user.barangay)
    .bind(&new_user.city)
    .bind(new_user.marketing_emails as i64)
    .bind(time::to_db(time::now()))
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            Error::Conflict(format!("email {} is already registered", email))
        }
        other => Error::Database(other),
    })?;

    get_user(pool, result.last_insert_rowid()).await
}

pub async fn email_exists(pool: &SqlitePool, email: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
        .bind(email.trim().to_lowercase())
        .fetch_one(pool)
        .await?;
    Ok(count > 0)
}

pub async fn find_user(pool: &SqlitePool, id: i64) -> Result<Option<User>> {
    let row = sqlx::query(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Like [`find_user`] but a missing row is [`Error::NotFound`]
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<User> {
    find_user(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", id)))
}

/// Account id and stored password hash for an email, if the account exists
pub async fn find_credentials(pool: &SqlitePool, email: &str) -> Result<Option<(i64, String)>> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = ?")
        .bind(email.trim().to_lowercase())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| (row.get("id"), row.get("password_hash"))))
}

/// Apply the non-`None` fields of `update`
pub async fn update_profile(pool: &SqlitePool, id: i64, update: &ProfileUpdate) -> Result<User> {
    let skills = update
        .skills
        .as_deref()
        .map(|s| encode_string_list("skills", s))
        .transpose()?;

    let result = sqlx::query(
        r#"
        UPDATE users SET
            bio = COALESCE(?, bio),
            skills = COALESCE(?, skills),
            hourly_rate = COALESCE(?, hourly_rate),
            portfolio_url = COALESCE(?, portfolio_url)
        WHERE id = ?
        "#,
    )
    .bind(&update.bio)
    .bind(&skills)
    .bind(update.hourly_rate)
    .bind(&update.portfolio_url)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("user {}", id)));
    }

    get_user(pool, id).await
}

/// Record performance aggregates computed by the review/project workflow
pub async fn set_performance(
    pool: &SqlitePool,
    id: i64,
    completion_rate: f64,
    average_rating: f64,
) -> Result<()> {
    sqlx::query("UPDATE users SET completion_rate = ?, average_rating = ? WHERE id = ?")
        .bind(completion_rate)
        .bind(average_rating)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// All freelancer accounts, oldest first
pub async fn list_freelancers(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM users WHERE user_type = 'freelancer' ORDER BY id",
        USER_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    rows.iter().map(user_from_row).collect()
}

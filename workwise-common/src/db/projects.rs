//! Project queries
//!
//! Projects are created by the bid acceptance workflow; the insight
//! endpoints only count and average them.

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::{NewProject, Project, ProjectStatus};
use crate::{time, Error, Money, Result};

fn project_from_row(row: &SqliteRow) -> Result<Project> {
    let status: String = row.get("status");
    let created_at: String = row.get("created_at");

    Ok(Project {
        id: row.get("id"),
        job_id: row.get("job_id"),
        client_id: row.get("client_id"),
        freelancer_id: row.get("freelancer_id"),
        agreed_amount: Money::from_cents(row.get("agreed_amount_cents")),
        status: status.parse::<ProjectStatus>()?,
        created_at: time::from_db(&created_at)?,
    })
}

pub async fn create_project(pool: &SqlitePool, new_project: &NewProject) -> Result<Project> {
    let result = sqlx::query(
        r#"
        INSERT INTO projects (job_id, client_id, freelancer_id, agreed_amount_cents, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(new_project.job_id)
    .bind(new_project.client_id)
    .bind(new_project.freelancer_id)
    .bind(new_project.agreed_amount.cents())
    .bind(new_project.status.as_str())
    .bind(time::to_db(time::now()))
    .execute(pool)
    .await?;

    let row = sqlx::query(
        "SELECT id, job_id, client_id, freelancer_id, agreed_amount_cents, status, created_at \
         FROM projects WHERE id = ?",
    )
    .bind(result.last_insert_rowid())
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::Internal("inserted project vanished".to_string()))?;

    project_from_row(&row)
}

/// Number of projects where `client_id` is the hiring client
pub async fn count_for_client(pool: &SqlitePool, client_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE client_id = ?")
        .bind(client_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_for_client_with_status(
    pool: &SqlitePool,
    client_id: i64,
    status: ProjectStatus,
) -> Result<i64> {
    let count =
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE client_id = ? AND status = ?")
            .bind(client_id)
            .bind(status.as_str())
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn count_for_freelancer_with_status(
    pool: &SqlitePool,
    freelancer_id: i64,
    status: ProjectStatus,
) -> Result<i64> {
    let count =
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE freelancer_id = ? AND status = ?")
            .bind(freelancer_id)
            .bind(status.as_str())
            .fetch_one(pool)
            .await?;
    Ok(count)
}

/// Mean agreed amount across a client's projects, `None` when they have none
pub async fn average_agreed_amount_for_client(
    pool: &SqlitePool,
    client_id: i64,
) -> Result<Option<f64>> {
    let avg_cents: Option<f64> = sqlx::query_scalar(
        "SELECT AVG(CAST(agreed_amount_cents AS REAL)) FROM projects WHERE client_id = ?",
    )
    .bind(client_id)
    .fetch_one(pool)
    .await?;
    Ok(avg_cents.map(|c| c / 100.0))
}

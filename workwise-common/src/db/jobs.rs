//! Job (gig) queries

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::{Job, JobStatus, NewJob, User};
use super::{decode_string_list, encode_string_list, users};
use crate::{time, Error, Money, Result};

const JOB_COLUMNS: &str = "id, employer_id, title, description, required_skills, \
     budget_min_cents, budget_max_cents, experience_level, status, created_at";

fn job_from_row(row: &SqliteRow) -> Result<Job> {
    let required_skills: String = row.get("required_skills");
    let status: String = row.get("status");
    let created_at: String = row.get("created_at");

    Ok(Job {
        id: row.get("id"),
        employer_id: row.get("employer_id"),
        title: row.get("title"),
        description: row.get("description"),
        required_skills: decode_string_list("required_skills", &required_skills)?,
        budget_min: Money::from_cents(row.get("budget_min_cents")),
        budget_max: Money::from_cents(row.get("budget_max_cents")),
        experience_level: row.get("experience_level"),
        status: status.parse::<JobStatus>()?,
        created_at: time::from_db(&created_at)?,
    })
}

pub async fn create_job(pool: &SqlitePool, new_job: &NewJob) -> Result<Job> {
    let required_skills = encode_string_list("required_skills", &new_job.required_skills)?;

    let result = sqlx::query(
        r#"
        INSERT INTO jobs (
            employer_id, title, description, required_skills,
            budget_min_cents, budget_max_cents, experience_level, status, created_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, 'open', ?)
        "#,
    )
    .bind(new_job.employer_id)
    .bind(&new_job.title)
    .bind(&new_job.description)
    .bind(&required_skills)
    .bind(new_job.budget_min.cents())
    .bind(new_job.budget_max.cents())
    .bind(&new_job.experience_level)
    .bind(time::to_db(time::now()))
    .execute(pool)
    .await?;

    get_job(pool, result.last_insert_rowid()).await
}

pub async fn find_job(pool: &SqlitePool, id: i64) -> Result<Option<Job>> {
    let row = sqlx::query(&format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(job_from_row).transpose()
}

pub async fn get_job(pool: &SqlitePool, id: i64) -> Result<Job> {
    find_job(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("job {}", id)))
}

/// The client who posted `job`
pub async fn employer(pool: &SqlitePool, job: &Job) -> Result<User> {
    users::get_user(pool, job.employer_id).await
}

/// Open jobs a freelancer could still bid on: not their own and not already bid on
pub async fn list_open_jobs_for_freelancer(
    pool: &SqlitePool,
    freelancer_id: i64,
) -> Result<Vec<Job>> {
    let rows = sqlx::query(&format!(
        r#"
        SELECT {} FROM jobs
        WHERE status = 'open'
          AND employer_id != ?
          AND id NOT IN (SELECT job_id FROM bids WHERE freelancer_id = ?)
        ORDER BY id
        "#,
        JOB_COLUMNS
    ))
    .bind(freelancer_id)
    .bind(freelancer_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(job_from_row).collect()
}

pub async fn set_status(pool: &SqlitePool, id: i64, status: JobStatus) -> Result<()> {
    let result = sqlx::query("UPDATE jobs SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("job {}", id)));
    }
    Ok(())
}

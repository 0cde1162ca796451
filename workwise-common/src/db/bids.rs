//! Bid queries and relationship lookups

use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::{Bid, BidStatus, Job, NewBid, User};
use super::{jobs, users};
use crate::{time, Error, Money, Result};

const BID_COLUMNS: &str = "id, job_id, freelancer_id, bid_amount_cents, proposal_message, \
     estimated_days, status, submitted_at";

fn bid_from_row(row: &SqliteRow) -> Result<Bid> {
    let status: String = row.get("status");
    let submitted_at: String = row.get("submitted_at");

    Ok(Bid {
        id: row.get("id"),
        job_id: row.get("job_id"),
        freelancer_id: row.get("freelancer_id"),
        bid_amount: Money::from_cents(row.get("bid_amount_cents")),
        proposal_message: row.get("proposal_message"),
        estimated_days: row.get("estimated_days"),
        status: status.parse::<BidStatus>()?,
        submitted_at: time::from_db(&submitted_at)?,
    })
}

/// Record a submitted proposal; new bids always start out pending
///
/// A second bid by the same freelancer on the same job yields
/// [`Error::Conflict`].
pub async fn create_bid(pool: &SqlitePool, new_bid: &NewBid) -> Result<Bid> {
    let result = sqlx::query(
        r#"
        INSERT INTO bids (
            job_id, freelancer_id, bid_amount_cents, proposal_message,
            estimated_days, status, submitted_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(new_bid.job_id)
    .bind(new_bid.freelancer_id)
    .bind(new_bid.bid_amount.cents())
    .bind(&new_bid.proposal_message)
    .bind(new_bid.estimated_days)
    .bind(BidStatus::Pending.as_str())
    .bind(time::to_db(time::now()))
    .execute(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => Error::Conflict(format!(
            "freelancer {} has already bid on job {}",
            new_bid.freelancer_id, new_bid.job_id
        )),
        other => Error::Database(other),
    })?;

    get_bid(pool, result.last_insert_rowid()).await
}

pub async fn find_bid(pool: &SqlitePool, id: i64) -> Result<Option<Bid>> {
    let row = sqlx::query(&format!("SELECT {} FROM bids WHERE id = ?", BID_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(bid_from_row).transpose()
}

pub async fn get_bid(pool: &SqlitePool, id: i64) -> Result<Bid> {
    find_bid(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("bid {}", id)))
}

/// Bids on a job, oldest first
pub async fn list_for_job(pool: &SqlitePool, job_id: i64) -> Result<Vec<Bid>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM bids WHERE job_id = ? ORDER BY submitted_at, id",
        BID_COLUMNS
    ))
    .bind(job_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(bid_from_row).collect()
}

pub async fn has_bid(pool: &SqlitePool, job_id: i64, freelancer_id: i64) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM bids WHERE job_id = ? AND freelancer_id = ?")
            .bind(job_id)
            .bind(freelancer_id)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Overwrite a bid's status
///
/// No transition rules are applied here; the acceptance workflow decides.
pub async fn set_status(pool: &SqlitePool, id: i64, status: BidStatus) -> Result<()> {
    let result = sqlx::query("UPDATE bids SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("bid {}", id)));
    }
    Ok(())
}

impl Bid {
    /// The job this bid is for
    pub async fn job(&self, pool: &SqlitePool) -> Result<Job> {
        jobs::get_job(pool, self.job_id).await
    }

    /// The freelancer who made this bid
    pub async fn freelancer(&self, pool: &SqlitePool) -> Result<User> {
        users::get_user(pool, self.freelancer_id).await
    }
}

//! Review queries

use sqlx::SqlitePool;

use super::models::NewReview;
use crate::{time, Error, Result};

pub async fn create_review(pool: &SqlitePool, review: &NewReview) -> Result<i64> {
    if !(1..=5).contains(&review.rating) {
        return Err(Error::InvalidInput(format!(
            "rating must be between 1 and 5, got {}",
            review.rating
        )));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO reviews (project_id, reviewer_id, reviewee_id, rating, comment, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(review.project_id)
    .bind(review.reviewer_id)
    .bind(review.reviewee_id)
    .bind(review.rating)
    .bind(&review.comment)
    .bind(time::to_db(time::now()))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Reviews written about `user_id`
pub async fn count_received(pool: &SqlitePool, user_id: i64) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM reviews WHERE reviewee_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

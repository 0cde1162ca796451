//! Job posting and bid endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use workwise_common::db::{bids, jobs, users, JobStatus, NewBid, NewJob};
use workwise_common::{Error, Money};

use crate::auth::{ensure_client, ensure_freelancer, ensure_job_owner, AuthUser};
use crate::error::FieldErrors;
use crate::views::{BidDetail, JobDetail};
use crate::{ApiError, ApiResult, AppState};

const DUPLICATE_BID_MESSAGE: &str = "You have already submitted a bid for this job";

pub const EXPERIENCE_LEVELS: [&str; 3] = ["entry", "intermediate", "expert"];

fn default_experience_level() -> String {
    "intermediate".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub budget_min: Money,
    pub budget_max: Money,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

impl CreateJobRequest {
    fn into_new_job(self, employer_id: i64) -> Result<NewJob, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.insert("title".into(), "The title field is required.".into());
        } else if title.chars().count() > 255 {
            errors.insert("title".into(), "The title may not be greater than 255 characters.".into());
        }

        let description = self.description.trim().to_string();
        if description.is_empty() {
            errors.insert("description".into(), "The description field is required.".into());
        }

        if self.budget_max < self.budget_min {
            errors.insert(
                "budget_max".into(),
                "The budget max must be greater than or equal to budget min.".into(),
            );
        }

        let experience_level = self.experience_level.trim().to_lowercase();
        if !EXPERIENCE_LEVELS.contains(&experience_level.as_str()) {
            errors.insert(
                "experience_level".into(),
                "The selected experience level is invalid.".into(),
            );
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewJob {
            employer_id,
            title,
            description,
            required_skills: self
                .required_skills
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            budget_min: self.budget_min,
            budget_max: self.budget_max,
            experience_level,
        })
    }
}

/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<JobDetail>)> {
    ensure_client(&auth.user, "Only clients can post jobs")?;
    let new_job = request
        .into_new_job(auth.user.id)
        .map_err(ApiError::Validation)?;

    let job = jobs::create_job(&state.db, &new_job).await?;
    info!("Client {} posted job {}", auth.user.id, job.id);

    Ok((StatusCode::CREATED, Json(JobDetail::new(job, &auth.user))))
}

/// GET /jobs/:id
pub async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<JobDetail>> {
    let job = jobs::get_job(&state.db, id).await?;
    let employer = jobs::employer(&state.db, &job).await?;
    Ok(Json(JobDetail::new(job, &employer)))
}

/// POST /jobs/:id/close
pub async fn close_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<JobDetail>> {
    let job = jobs::get_job(&state.db, id).await?;
    ensure_job_owner(&auth.user, &job)?;

    jobs::set_status(&state.db, job.id, JobStatus::Closed).await?;
    info!("Client {} closed job {}", auth.user.id, job.id);

    let job = jobs::get_job(&state.db, id).await?;
    Ok(Json(JobDetail::new(job, &auth.user)))
}

#[derive(Debug, Deserialize)]
pub struct SubmitBidRequest {
    pub bid_amount: Money,
    #[serde(default)]
    pub proposal_message: String,
    pub estimated_days: i64,
}

/// POST /jobs/:id/bids
///
/// Bids always start out pending.
pub async fn submit_bid(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i64>,
    Json(request): Json<SubmitBidRequest>,
) -> ApiResult<(StatusCode, Json<BidDetail>)> {
    ensure_freelancer(&auth.user, "Only freelancers can submit bids")?;

    let job = jobs::get_job(&state.db, job_id).await?;
    if job.status != JobStatus::Open {
        return Err(ApiError::BadRequest("This job is no longer accepting bids".into()));
    }
    if job.employer_id == auth.user.id {
        return Err(ApiError::BadRequest("You cannot bid on your own job".into()));
    }
    if bids::has_bid(&state.db, job.id, auth.user.id).await? {
        return Err(ApiError::Conflict(DUPLICATE_BID_MESSAGE.into()));
    }

    let mut errors = FieldErrors::new();
    if request.bid_amount.is_zero() {
        errors.insert("bid_amount".into(), "The bid amount must be greater than 0.".into());
    }
    let proposal_message = request.proposal_message.trim().to_string();
    if proposal_message.is_empty() {
        errors.insert(
            "proposal_message".into(),
            "The proposal message field is required.".into(),
        );
    }
    if request.estimated_days < 1 {
        errors.insert(
            "estimated_days".into(),
            "The estimated days must be at least 1.".into(),
        );
    }
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let bid = bids::create_bid(
        &state.db,
        &NewBid {
            job_id: job.id,
            freelancer_id: auth.user.id,
            bid_amount: request.bid_amount,
            proposal_message,
            estimated_days: request.estimated_days,
        },
    )
    .await
    .map_err(|e| match e {
        // Lost a race with a concurrent submission
        Error::Conflict(_) => ApiError::Conflict(DUPLICATE_BID_MESSAGE.into()),
        other => other.into(),
    })?;
    info!(
        "Freelancer {} bid {} on job {}",
        auth.user.id, bid.bid_amount, job.id
    );

    Ok((StatusCode::CREATED, Json(BidDetail::new(bid, job, &auth.user))))
}

/// GET /jobs/:id/bids
pub async fn list_bids(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i64>,
) -> ApiResult<Json<Vec<BidDetail>>> {
    let job = jobs::get_job(&state.db, job_id).await?;
    ensure_job_owner(&auth.user, &job)?;

    let mut details = Vec::new();
    for bid in bids::list_for_job(&state.db, job.id).await? {
        let freelancer = users::get_user(&state.db, bid.freelancer_id).await?;
        details.push(BidDetail::new(bid, job.clone(), &freelancer));
    }
    Ok(Json(details))
}

/// GET /bids/:id
///
/// Visible to the client who owns the job and to the bidding freelancer.
pub async fn get_bid(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<BidDetail>> {
    let bid = bids::get_bid(&state.db, id).await?;
    let job = bid.job(&state.db).await?;

    if auth.user.id != job.employer_id && auth.user.id != bid.freelancer_id {
        warn!("User {} attempted to view bid {}", auth.user.id, bid.id);
        return Err(ApiError::Unauthorized("Unauthorized".into()));
    }

    let freelancer = bid.freelancer(&state.db).await?;
    Ok(Json(BidDetail::new(bid, job, &freelancer)))
}

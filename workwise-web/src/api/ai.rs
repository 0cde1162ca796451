//! Insight and matching endpoints
//!
//! Handlers load the inputs (rows and counts) and hand them to the pure
//! functions in [`crate::insights`].

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;
use workwise_common::db::{jobs, projects, reviews, users, ProjectStatus, User};

use crate::auth::{ensure_freelancer, ensure_job_owner, AuthUser};
use crate::insights::catalog::client_insights;
use crate::insights::matching::{
    find_matching_freelancers, find_matching_jobs, JOB_SUGGESTIONS_LIMIT,
    MATCHING_FREELANCERS_LIMIT, RECOMMENDATIONS_LIMIT,
};
use crate::insights::{
    budget_optimization, earning_potential, hiring_success_rate, improvement_suggestions,
    preferred_freelancer_types, profile_score, skill_gaps,
};
use crate::{ApiResult, AppState};

/// Page-shaped payload: the dashboard component to render and its props
#[derive(Debug, Serialize)]
pub struct Page {
    pub component: &'static str,
    pub props: Value,
}

/// GET /ai/recommendations
pub async fn recommendations(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Page>> {
    let user = auth.user;

    let page = if user.is_freelancer() {
        let open_jobs = jobs::list_open_jobs_for_freelancer(&state.db, user.id).await?;
        let recommendations = find_matching_jobs(&user, open_jobs, RECOMMENDATIONS_LIMIT);
        Page {
            component: "AI/FreelancerRecommendations",
            props: json!({
                "recommendations": recommendations,
                "user": user,
            }),
        }
    } else {
        Page {
            component: "AI/ClientInsights",
            props: json!({
                "insights": client_insights(),
                "user": user,
            }),
        }
    };

    Ok(Json(page))
}

/// GET /ai/jobs/:id/matching-freelancers
pub async fn matching_freelancers(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let job = jobs::get_job(&state.db, job_id).await?;
    ensure_job_owner(&auth.user, &job)?;

    let freelancers = users::list_freelancers(&state.db).await?;
    let matches = find_matching_freelancers(&job, &freelancers, MATCHING_FREELANCERS_LIMIT);
    debug!("Job {}: {} matching freelancers", job.id, matches.len());

    Ok(Json(json!({
        "matches": matches,
        "total_matches": matches.len(),
        "job": job,
    })))
}

/// GET /ai/job-suggestions
pub async fn job_suggestions(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<Value>> {
    ensure_freelancer(&auth.user, "Only freelancers can access job suggestions")?;

    let open_jobs = jobs::list_open_jobs_for_freelancer(&state.db, auth.user.id).await?;
    let suggestions = find_matching_jobs(&auth.user, open_jobs, JOB_SUGGESTIONS_LIMIT);

    Ok(Json(json!({
        "suggestions": suggestions,
        "total_suggestions": suggestions.len(),
    })))
}

/// GET /ai/insights
pub async fn personalized_insights(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Value>> {
    let body = if auth.user.is_freelancer() {
        freelancer_insights(&state, &auth.user).await?
    } else {
        hiring_insights(&state, &auth.user).await?
    };
    Ok(Json(body))
}

async fn freelancer_insights(state: &AppState, user: &User) -> ApiResult<Value> {
    let review_count = reviews::count_received(&state.db, user.id).await?;
    let active_projects =
        projects::count_for_freelancer_with_status(&state.db, user.id, ProjectStatus::Active)
            .await?;

    Ok(json!({
        "profile_score": profile_score(user, review_count),
        "improvement_suggestions": improvement_suggestions(user, active_projects),
        "earning_potential": earning_potential(user),
        "skill_gaps": skill_gaps(&user.skills),
    }))
}

async fn hiring_insights(state: &AppState, user: &User) -> ApiResult<Value> {
    let total = projects::count_for_client(&state.db, user.id).await?;
    let completed =
        projects::count_for_client_with_status(&state.db, user.id, ProjectStatus::Completed)
            .await?;
    let average_cost = projects::average_agreed_amount_for_client(&state.db, user.id).await?;

    Ok(json!({
        "hiring_success_rate": hiring_success_rate(total, completed),
        "budget_optimization": budget_optimization(average_cost),
        "preferred_freelancer_types": preferred_freelancer_types(),
    }))
}

//! workwise-web library
//!
//! HTTP surface of the WorkWise marketplace: registration, sessions,
//! profiles, jobs and bids, and the rule-based insight endpoints.

use axum::{body::Body, http::Request, Router};
use sqlx::SqlitePool;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub mod api;
pub mod auth;
pub mod error;
pub mod insights;
pub mod registration;
pub mod views;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// When the server started, reported by /health
    pub startup_time: Instant,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            startup_time: Instant::now(),
        }
    }
}

/// Build application router
///
/// Authentication is enforced per handler by the [`auth::AuthUser`]
/// extractor, so public and protected routes share one router.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let accounts = Router::new()
        .route("/register", get(api::serve_register_page).post(api::register))
        .route("/login", post(api::login))
        .route("/logout", post(api::logout))
        .route("/profile", get(api::get_profile).put(api::update_profile));

    let marketplace = Router::new()
        .route("/jobs", post(api::create_job))
        .route("/jobs/:id", get(api::get_job))
        .route("/jobs/:id/close", post(api::close_job))
        .route("/jobs/:id/bids", get(api::list_bids).post(api::submit_bid))
        .route("/bids/:id", get(api::get_bid));

    let ai = Router::new()
        .route("/ai/recommendations", get(api::recommendations))
        .route(
            "/ai/jobs/:id/matching-freelancers",
            get(api::matching_freelancers),
        )
        .route("/ai/job-suggestions", get(api::job_suggestions))
        .route("/ai/insights", get(api::personalized_insights));

    let public = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/barangays", get(api::list_barangays))
        .merge(api::health_routes());

    Router::new()
        .merge(accounts)
        .merge(marketplace)
        .merge(ai)
        .merge(public)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

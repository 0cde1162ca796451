//! Request authentication and authorization
//!
//! [`AuthUser`] is the explicit request context: an extractor that resolves
//! `Authorization: Bearer <token>` to a stored session. The guard helpers
//! below fail closed; a handler that needs an owner or a role calls them
//! before touching any data.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::{debug, warn};
use workwise_common::db::{sessions, Job, User};

use crate::{ApiError, AppState};

/// Authenticated requester
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    /// Raw bearer token, kept so the session can be revoked on logout
    pub token: String,
}

/// Extract the token from an `Authorization` header value
pub fn parse_bearer(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        let token = parse_bearer(header).ok_or(ApiError::Unauthenticated)?;

        let user = sessions::find_user_by_token(&state.db, token)
            .await?
            .ok_or_else(|| {
                debug!("Rejected unknown session token");
                ApiError::Unauthenticated
            })?;

        Ok(AuthUser {
            user,
            token: token.to_string(),
        })
    }
}

/// Only the client who posted `job` may proceed
pub fn ensure_job_owner(user: &User, job: &Job) -> Result<(), ApiError> {
    if job.employer_id != user.id {
        warn!(
            "User {} attempted to access job {} owned by {}",
            user.id, job.id, job.employer_id
        );
        return Err(ApiError::Unauthorized("Unauthorized".to_string()));
    }
    Ok(())
}

/// Only freelancer accounts may proceed
pub fn ensure_freelancer(user: &User, message: &str) -> Result<(), ApiError> {
    if !user.is_freelancer() {
        warn!("User {} ({}) rejected: {}", user.id, user.user_type, message);
        return Err(ApiError::ForbiddenRole(message.to_string()));
    }
    Ok(())
}

/// Only client accounts may proceed
pub fn ensure_client(user: &User, message: &str) -> Result<(), ApiError> {
    if !user.is_client() {
        warn!("User {} ({}) rejected: {}", user.id, user.user_type, message);
        return Err(ApiError::ForbiddenRole(message.to_string()));
    }
    Ok(())
}

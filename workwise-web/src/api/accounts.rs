//! Registration, sessions and profile endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use workwise_common::auth::{hash_password, verify_dummy_password, verify_password};
use workwise_common::db::{sessions, users, NewUser, ProfileUpdate, User};

use crate::auth::AuthUser;
use crate::error::FieldErrors;
use crate::registration::RegistrationForm;
use crate::{ApiError, ApiResult, AppState};

const MAX_BIO_LENGTH: usize = 5000;
const MAX_SKILLS: usize = 50;

/// Account plus a fresh bearer token
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
}

/// POST /register
///
/// Password fields are wiped once the submission has been handled,
/// whatever the outcome.
pub async fn register(
    State(state): State<AppState>,
    Json(mut form): Json<RegistrationForm>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let outcome = create_account(&state, &form).await;
    form.clear_passwords();
    outcome.map(|session| (StatusCode::CREATED, Json(session)))
}

async fn create_account(state: &AppState, form: &RegistrationForm) -> ApiResult<SessionResponse> {
    let valid = form.validate().map_err(ApiError::Validation)?;

    if users::email_exists(&state.db, &valid.email).await? {
        return Err(ApiError::field("email", "The email has already been taken."));
    }

    let password_hash = hash_password(&form.password)?;
    let user = users::create_user(
        &state.db,
        &NewUser {
            first_name: valid.first_name,
            last_name: valid.last_name,
            email: valid.email,
            password_hash,
            user_type: valid.user_type,
            barangay: valid.barangay,
            city: valid.city,
            marketing_emails: valid.marketing_emails,
        },
    )
    .await?;

    let token = sessions::create_session(&state.db, user.id).await?;
    info!(
        "Registered {} account {} ({})",
        user.user_type, user.id, user.barangay
    );

    Ok(SessionResponse { user, token })
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let rejected = || ApiError::field("email", "These credentials do not match our records.");

    let Some((user_id, stored)) = users::find_credentials(&state.db, &request.email).await? else {
        // Same hashing cost as a wrong password for an existing account
        verify_dummy_password(&request.password);
        return Err(rejected());
    };

    if !verify_password(&request.password, &stored) {
        warn!("Failed login for user {}", user_id);
        return Err(rejected());
    }

    let user = users::get_user(&state.db, user_id).await?;
    let token = sessions::create_session(&state.db, user.id).await?;
    info!("User {} signed in", user.id);

    Ok(Json(SessionResponse { user, token }))
}

/// POST /logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<StatusCode> {
    sessions::delete_session(&state.db, &auth.token).await?;
    info!("User {} signed out", auth.user.id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /profile
pub async fn get_profile(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// Trim free text and validate the ranges the insight scoring relies on
fn normalize_profile_update(mut update: ProfileUpdate) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(bio) = update.bio.as_mut() {
        *bio = bio.trim().to_string();
        if bio.chars().count() > MAX_BIO_LENGTH {
            errors.insert(
                "bio".into(),
                format!("The bio may not be greater than {} characters.", MAX_BIO_LENGTH),
            );
        }
    }

    if let Some(skills) = update.skills.as_mut() {
        *skills = skills
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if skills.len() > MAX_SKILLS {
            errors.insert(
                "skills".into(),
                format!("The skills may not have more than {} items.", MAX_SKILLS),
            );
        }
    }

    if let Some(rate) = update.hourly_rate {
        if !rate.is_finite() || rate < 0.0 {
            errors.insert(
                "hourly_rate".into(),
                "The hourly rate must be at least 0.".into(),
            );
        }
    }

    if let Some(url) = update.portfolio_url.as_mut() {
        *url = url.trim().to_string();
        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        if !url.is_empty() && (!has_scheme || url.contains(char::is_whitespace)) {
            errors.insert(
                "portfolio_url".into(),
                "The portfolio url must be a valid URL.".into(),
            );
        }
    }

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(errors)
    }
}

/// PUT /profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<User>> {
    let update = normalize_profile_update(update).map_err(ApiError::Validation)?;
    let user = users::update_profile(&state.db, auth.user.id, &update).await?;
    info!("User {} updated their profile", user.id);
    Ok(Json(user))
}

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::profiles::{CandidateProfile, Profile, ProfileCompletion};

use crate::docs::ErrorResponse;
use crate::middleware::auth::SessionUser;
use crate::state::AppState;

use super::service::ProfileService;

/// Get the signed-in user's profile
#[utoipa::path(
    get,
    path = "/api/profile",
    responses(
        (status = 200, description = "Candidate or employer profile, by session role", body = Profile),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::get_profile(&state, &user).await?;
    Ok(Json(profile))
}

/// Update the signed-in user's profile
#[utoipa::path(
    put,
    path = "/api/profile",
    request_body(
        content = CandidateProfile,
        description = "`CandidateProfile` for candidates, `EmployerProfile` for employers"
    ),
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state, body))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: SessionUser,
    body: Bytes,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::update_profile(&state, &user, &body).await?;
    Ok(Json(profile))
}

/// How complete the signed-in user's profile is
#[utoipa::path(
    get,
    path = "/api/profile/completion",
    responses(
        (status = 200, description = "Completion percentage and missing fields", body = ProfileCompletion),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_completion(
    State(state): State<AppState>,
    user: SessionUser,
) -> Result<Json<ProfileCompletion>, AppError> {
    let completion = ProfileService::completion(&state, &user).await?;
    Ok(Json(completion))
}

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::auth::{
    ForgotPasswordRequest, LoginRequest, MessageResponse, ResendOtpRequest, ResetPasswordRequest,
    SessionResponse, SignupRequest, VerifyOtpRequest,
};

use crate::docs::ErrorResponse;
use crate::middleware::auth::{OptionalSession, SessionUser};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

/// Sign in and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; `session` cookie set", body = SessionResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 502, description = "Backend unavailable", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let (jar, response) = AuthService::login(&state, jar, dto).await?;
    Ok((jar, Json(response)))
}

/// Create an account and receive the session cookie
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created; `session` cookie set", body = SessionResponse),
        (status = 400, description = "Rejected by the backend, e.g. email taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, dto))]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, CookieJar, Json<SessionResponse>), AppError> {
    let (jar, response) = AuthService::signup(&state, jar, dto).await?;
    Ok((StatusCode::CREATED, jar, Json(response)))
}

/// Sign out
///
/// A plain HTML form post is sent back to the sign-in page; API clients get JSON.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse),
        (status = 303, description = "Session cookie cleared; form posts are redirected to the sign-in page")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar, session, headers))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    OptionalSession(session): OptionalSession,
    headers: HeaderMap,
) -> Response {
    let jar = AuthService::logout(&state, jar, session).await;

    if is_form_post(&headers) {
        return (jar, Redirect::to(&state.routes.login_path)).into_response();
    }

    (
        jar,
        Json(MessageResponse {
            message: "Signed out".to_string(),
        }),
    )
        .into_response()
}

fn is_form_post(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"))
}

/// Verify the signed-in user's email with a one-time code
#[utoipa::path(
    post,
    path = "/api/auth/verify-otp",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Email verified", body = MessageResponse),
        (status = 400, description = "Malformed or rejected code", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn verify_otp(
    State(state): State<AppState>,
    user: SessionUser,
    ValidatedJson(dto): ValidatedJson<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = AuthService::verify_otp(&state, user.user_id(), dto).await?;
    Ok(Json(response))
}

/// Send a new verification code
#[utoipa::path(
    post,
    path = "/api/auth/resend-otp",
    request_body = ResendOtpRequest,
    responses(
        (status = 200, description = "Code sent", body = MessageResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, _user))]
pub async fn resend_otp(
    State(state): State<AppState>,
    _user: SessionUser,
    ValidatedJson(dto): ValidatedJson<ResendOtpRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = AuthService::resend_otp(&state, dto).await?;
    Ok(Json(response))
}

/// Request a password reset link
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Reset link sent if the account exists", body = MessageResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ForgotPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = AuthService::forgot_password(&state, dto).await?;
    Ok(Json(response))
}

/// Reset a password with the emailed token
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Password reset", body = MessageResponse),
        (status = 400, description = "Invalid or expired token", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn reset_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let response = AuthService::reset_password(&state, dto).await?;
    Ok(Json(response))
}

use axum_extra::extract::CookieJar;
use tracing::{debug, instrument, warn};

use staffee_auth::{SessionClaims, create_session, delete_session};
use staffee_core::AppError;
use staffee_models::CachedIdentity;
use staffee_models::OtpCode;
use staffee_models::auth::{
    AccountUser, ForgotPasswordRequest, LoginRequest, MessageResponse, ResendOtpRequest,
    ResetPasswordRequest, SessionResponse, SignupRequest, VerifyOtpRequest,
};

use crate::metrics::{track_login_failure, track_login_success, track_session_issued, track_signup};
use crate::state::AppState;
use crate::utils::backend::upstream;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(state, jar, dto), fields(email = %dto.email))]
    pub async fn login(
        state: &AppState,
        jar: CookieJar,
        dto: LoginRequest,
    ) -> Result<(CookieJar, SessionResponse), AppError> {
        let response = state.backend.login(&dto).await.map_err(|e| {
            let reason = match e.status() {
                Some(status) if status.is_client_error() => "rejected",
                _ => "backend",
            };
            track_login_failure(reason);
            upstream(e)
        })?;

        track_login_success(response.user.role);
        Self::start_session(state, jar, response.user).await
    }

    /// New accounts start unverified unless the backend says otherwise.
    #[instrument(skip(state, jar, dto), fields(email = %dto.email, role = %dto.role))]
    pub async fn signup(
        state: &AppState,
        jar: CookieJar,
        dto: SignupRequest,
    ) -> Result<(CookieJar, SessionResponse), AppError> {
        let mut user = state.backend.signup(&dto).await.map_err(upstream)?.user;
        user.verify_email.get_or_insert(false);

        track_signup(user.role);
        Self::start_session(state, jar, user).await
    }

    async fn start_session(
        state: &AppState,
        jar: CookieJar,
        user: AccountUser,
    ) -> Result<(CookieJar, SessionResponse), AppError> {
        let (jar, claims) = create_session(jar, &user.id, user.role, &state.session_config)?;
        track_session_issued();
        debug!(user_id = %claims.user_id, expires_at = %claims.expires_at(), "Session issued");

        // The cache only drives the verification prompt; a failed write must
        // not fail the sign-in.
        if let Err(e) = state
            .identity_cache
            .save(&CachedIdentity::from(user.clone()))
            .await
        {
            warn!(error = %e, "Identity not cached");
        }

        Ok((
            jar,
            SessionResponse {
                redirect_to: user.role.home_path().to_string(),
                user,
            },
        ))
    }

    #[instrument(skip(state, jar, session))]
    pub async fn logout(
        state: &AppState,
        jar: CookieJar,
        session: Option<SessionClaims>,
    ) -> CookieJar {
        if let Some(session) = session {
            if let Err(e) = state.identity_cache.remove(&session.user_id).await {
                warn!(user_id = %session.user_id, error = %e, "Cached identity not removed");
            }
        }

        delete_session(jar, &state.session_config)
    }

    #[instrument(skip(state, dto))]
    pub async fn verify_otp(
        state: &AppState,
        user_id: &str,
        dto: VerifyOtpRequest,
    ) -> Result<MessageResponse, AppError> {
        let otp = OtpCode::parse(&dto.otp).map_err(AppError::bad_request)?;

        // A code for another address must not clear this user's prompt.
        match state.identity_cache.get(user_id).await {
            Ok(Some(identity)) if !identity.email.eq_ignore_ascii_case(dto.email.trim()) => {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Email does not match the signed-in account"
                )));
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Identity cache unavailable"),
        }

        let response = state
            .backend
            .verify_otp(&dto.email, &otp)
            .await
            .map_err(upstream)?;

        match state.identity_cache.mark_email_verified(user_id).await {
            Ok(true) => debug!("Cached identity marked verified"),
            Ok(false) => debug!("No cached identity to mark verified"),
            Err(e) => warn!(error = %e, "Cached identity not updated"),
        }

        Ok(response)
    }

    pub async fn resend_otp(
        state: &AppState,
        dto: ResendOtpRequest,
    ) -> Result<MessageResponse, AppError> {
        state.backend.resend_otp(&dto).await.map_err(upstream)
    }

    pub async fn forgot_password(
        state: &AppState,
        dto: ForgotPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        state.backend.forgot_password(&dto).await.map_err(upstream)
    }

    pub async fn reset_password(
        state: &AppState,
        dto: ResetPasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        state.backend.reset_password(&dto).await.map_err(upstream)
    }
}

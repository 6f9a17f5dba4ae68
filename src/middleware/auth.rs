use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use staffee_auth::{Role, SessionClaims, read_session};
use staffee_core::AppError;

use crate::state::AppState;

fn session_from_parts(parts: &Parts, state: &AppState) -> Option<SessionClaims> {
    let jar = CookieJar::from_headers(&parts.headers);
    read_session(&jar, &state.session_config)
}

/// A valid session from the `session` cookie.
#[derive(Debug, Clone)]
pub struct SessionUser(pub SessionClaims);

impl SessionUser {
    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_from_parts(parts, state)
            .map(SessionUser)
            .ok_or_else(|| AppError::unauthorized("Not signed in".to_string()))
    }
}

/// The session when there is one. Expired and forged cookies read as `None`.
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionClaims>);

impl FromRequestParts<AppState> for OptionalSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalSession(session_from_parts(parts, state)))
    }
}

/// Declares an extractor that admits only sessions of one role.
#[macro_export]
macro_rules! require_role {
    ($name:ident, $role:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::SessionUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = staffee_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let user =
                    $crate::middleware::auth::SessionUser::from_request_parts(parts, state).await?;

                if user.role() != $role {
                    return Err(staffee_core::AppError::forbidden(format!(
                        "Access denied. Requires the {} role",
                        $role
                    )));
                }

                Ok($name(user))
            }
        }
    };
}

require_role!(RequireCandidate, Role::Candidate);
require_role!(RequireEmployer, Role::Employer);

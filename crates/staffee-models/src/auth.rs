//! Authentication payloads.
//!
//! Request DTOs are validated by the gateway before being forwarded; the
//! backend remains the authority on credentials.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use staffee_auth::Role;

use crate::identity::CachedIdentity;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 3, max = 30, message = "Username must be 3-30 characters"))]
    pub username: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub role: Role,
}

/// OTP submission. `otp` is normalised with [`crate::OtpCode::parse`] before
/// it is forwarded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VerifyOtpRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Verification code is required"))]
    #[schema(example = "123456")]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResendOtpRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "Reset token is required"))]
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// User as returned by the backend's auth endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountUser {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
}

impl From<AccountUser> for CachedIdentity {
    fn from(user: AccountUser) -> Self {
        CachedIdentity {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            role: user.role,
            verify_email: user.verify_email,
        }
    }
}

/// Backend response to login and signup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub user: AccountUser,
    #[serde(default)]
    pub message: Option<String>,
}

/// Gateway response once a session cookie has been issued.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub user: AccountUser,
    /// Dashboard the browser should navigate to next.
    #[schema(example = "/candidate")]
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

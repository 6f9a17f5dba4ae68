//! Session token signing and verification.
//!
//! Tokens are HS256 JWTs signed with [`SessionConfig::secret`]. Verification
//! accepts HS256 only and applies no leeway to `exp`.
//!
//! [`decrypt`] never reports *why* a token was rejected: expired, malformed,
//! wrongly signed and unknown-role tokens all come back as `None` and are
//! treated as "no session" by callers.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use staffee_config::SessionConfig;
use staffee_core::AppError;

use crate::claims::{Role, SessionClaims};

/// Signs `claims` into a session token.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn encrypt(claims: &SessionClaims, config: &SessionConfig) -> Result<String, AppError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create session token: {}", e)))
}

/// Verifies a session token and returns its claims, or `None` on any failure.
pub fn decrypt(token: &str, config: &SessionConfig) -> Option<SessionClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    match decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            debug!(error = %e, "Rejected session token");
            None
        }
    }
}

/// Builds claims expiring `config.expiry_seconds` from now and signs them.
///
/// Returns the token together with the claims it carries.
pub fn create_session_token(
    user_id: &str,
    role: Role,
    config: &SessionConfig,
) -> Result<(String, SessionClaims), AppError> {
    let now = Utc::now().timestamp() as usize;

    let claims = SessionClaims {
        user_id: user_id.to_string(),
        role,
        exp: now + config.expiry_seconds as usize,
        iat: now,
    };

    let token = encrypt(&claims, config)?;
    Ok((token, claims))
}

//! Identity record mirrored into the identity cache.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use staffee_auth::Role;

/// Minimal user identity. Never used for authorization; the session cookie
/// is the only authority for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CachedIdentity {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
}

impl CachedIdentity {
    /// Whether the dashboard should prompt for email verification.
    pub fn needs_email_verification(&self) -> bool {
        self.verify_email == Some(false)
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Contact-form submission, mailed to the configured contact inbox.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 200, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, max = 5000, message = "Message is required"))]
    pub message: String,
}

use tracing::instrument;

use staffee_core::AppError;
use staffee_models::contact::ContactMessage;

use crate::state::AppState;
use crate::utils::email::EmailService;

pub struct ContactService;

impl ContactService {
    /// Returns whether the message was relayed over SMTP.
    #[instrument(skip(state, message), fields(subject = %message.subject))]
    pub async fn submit(state: &AppState, message: &ContactMessage) -> Result<bool, AppError> {
        EmailService::new(state.email_config.clone())
            .send_contact_message(message)
            .await
    }
}

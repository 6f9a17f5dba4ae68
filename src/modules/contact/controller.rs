use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::auth::MessageResponse;
use staffee_models::contact::ContactMessage;

use crate::docs::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::ContactService;

/// Send a message to the Staffee team
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactMessage,
    responses(
        (status = 202, description = "Message accepted", body = MessageResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Mail relay failed", body = ErrorResponse)
    ),
    tag = "Contact"
)]
#[instrument(skip(state, message))]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(message): ValidatedJson<ContactMessage>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    ContactService::submit(&state, &message).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Thanks for reaching out. We'll get back to you soon.".to_string(),
        }),
    ))
}

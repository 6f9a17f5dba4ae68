use axum::Json;
use axum::extract::State;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::ai::{BlogPostPrompt, GeneratedContent, JobDescriptionPrompt};

use crate::docs::ErrorResponse;
use crate::middleware::auth::{RequireEmployer, SessionUser};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AiService;

/// Draft a job description
#[utoipa::path(
    post,
    path = "/api/ai/job-description",
    request_body = JobDescriptionPrompt,
    responses(
        (status = 200, description = "Generated description", body = GeneratedContent),
        (status = 403, description = "Employers only", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse)
    ),
    tag = "AI"
)]
#[instrument(skip(state, prompt))]
pub async fn generate_job_description(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    ValidatedJson(prompt): ValidatedJson<JobDescriptionPrompt>,
) -> Result<Json<GeneratedContent>, AppError> {
    let content = AiService::job_description(&state, user.user_id(), &prompt).await?;
    Ok(Json(content))
}

/// Draft a blog post
#[utoipa::path(
    post,
    path = "/api/ai/blog-post",
    request_body = BlogPostPrompt,
    responses(
        (status = 200, description = "Generated post", body = GeneratedContent),
        (status = 401, description = "Not signed in", body = ErrorResponse),
        (status = 502, description = "Generation failed", body = ErrorResponse)
    ),
    tag = "AI"
)]
#[instrument(skip(state, prompt))]
pub async fn generate_blog_post(
    State(state): State<AppState>,
    user: SessionUser,
    ValidatedJson(prompt): ValidatedJson<BlogPostPrompt>,
) -> Result<Json<GeneratedContent>, AppError> {
    let content = AiService::blog_post(&state, user.user_id(), &prompt).await?;
    Ok(Json(content))
}

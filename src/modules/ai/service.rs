use tracing::instrument;

use staffee_core::AppError;
use staffee_models::ai::{BlogPostPrompt, GeneratedContent, JobDescriptionPrompt};

use crate::state::AppState;
use crate::utils::backend::upstream;

pub struct AiService;

impl AiService {
    #[instrument(skip(state, prompt))]
    pub async fn job_description(
        state: &AppState,
        user_id: &str,
        prompt: &JobDescriptionPrompt,
    ) -> Result<GeneratedContent, AppError> {
        state
            .backend
            .generate_job_description(user_id, prompt)
            .await
            .map_err(upstream)
    }

    #[instrument(skip(state, prompt))]
    pub async fn blog_post(
        state: &AppState,
        user_id: &str,
        prompt: &BlogPostPrompt,
    ) -> Result<GeneratedContent, AppError> {
        state
            .backend
            .generate_blog_post(user_id, prompt)
            .await
            .map_err(upstream)
    }
}

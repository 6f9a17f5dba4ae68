//! AI generation. Prompts are forwarded as-is; the backend calls the model.

use reqwest::Method;
use tracing::instrument;

use staffee_models::ai::{BlogPostPrompt, GeneratedContent, JobDescriptionPrompt};

use crate::client::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    #[instrument(skip(self, prompt), fields(title = %prompt.title))]
    pub async fn generate_job_description(
        &self,
        user_id: &str,
        prompt: &JobDescriptionPrompt,
    ) -> Result<GeneratedContent, ClientError> {
        let call = self
            .request_as(Method::POST, &["ai", "job-description"], user_id)?
            .json(prompt);
        self.send_json(call).await
    }

    #[instrument(skip(self, prompt), fields(topic = %prompt.topic))]
    pub async fn generate_blog_post(
        &self,
        user_id: &str,
        prompt: &BlogPostPrompt,
    ) -> Result<GeneratedContent, ClientError> {
        let call = self
            .request_as(Method::POST, &["ai", "blog-post"], user_id)?
            .json(prompt);
        self.send_json(call).await
    }
}

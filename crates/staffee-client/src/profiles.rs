use reqwest::Method;
use tracing::instrument;

use staffee_models::profiles::{CandidateProfile, EmployerProfile};

use crate::client::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    #[instrument(skip(self))]
    pub async fn candidate_profile(&self, user_id: &str) -> Result<CandidateProfile, ClientError> {
        let call = self.request_as(Method::GET, &["candidates", user_id], user_id)?;
        self.send_json(call).await
    }

    #[instrument(skip(self, profile))]
    pub async fn update_candidate_profile(
        &self,
        user_id: &str,
        profile: &CandidateProfile,
    ) -> Result<CandidateProfile, ClientError> {
        let call = self
            .request_as(Method::PUT, &["candidates", user_id], user_id)?
            .json(profile);
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn employer_profile(&self, user_id: &str) -> Result<EmployerProfile, ClientError> {
        let call = self.request_as(Method::GET, &["employers", user_id], user_id)?;
        self.send_json(call).await
    }

    #[instrument(skip(self, profile))]
    pub async fn update_employer_profile(
        &self,
        user_id: &str,
        profile: &EmployerProfile,
    ) -> Result<EmployerProfile, ClientError> {
        let call = self
            .request_as(Method::PUT, &["employers", user_id], user_id)?
            .json(profile);
        self.send_json(call).await
    }
}

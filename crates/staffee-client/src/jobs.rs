//! Jobs, applications and contracts.

use reqwest::Method;
use tracing::instrument;

use staffee_models::jobs::{
    ApplyRequest, Contract, CreateJobDto, GenerateContractRequest, Job, JobApplication,
    JobFilter, JobStatus, JobStatusUpdate, NewApplication, NewJob, UpdateJobDto,
};

use crate::client::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    #[instrument(skip(self))]
    pub async fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>, ClientError> {
        let call = self.request(Method::GET, &["jobs"])?.query(filter);
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn job(&self, job_id: &str) -> Result<Job, ClientError> {
        let call = self.request(Method::GET, &["jobs", job_id])?;
        self.send_json(call).await
    }

    #[instrument(skip(self, job), fields(title = %job.title))]
    pub async fn create_job(&self, employer_id: &str, job: &CreateJobDto) -> Result<Job, ClientError> {
        let body = NewJob { employer_id, job };
        let call = self
            .request_as(Method::POST, &["jobs"], employer_id)?
            .json(&body);
        self.send_json(call).await
    }

    #[instrument(skip(self, changes))]
    pub async fn update_job(
        &self,
        employer_id: &str,
        job_id: &str,
        changes: &UpdateJobDto,
    ) -> Result<Job, ClientError> {
        let call = self
            .request_as(Method::PUT, &["jobs", job_id], employer_id)?
            .json(changes);
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn delete_job(&self, employer_id: &str, job_id: &str) -> Result<(), ClientError> {
        let call = self.request_as(Method::DELETE, &["jobs", job_id], employer_id)?;
        self.send_empty(call).await
    }

    #[instrument(skip(self))]
    pub async fn set_job_status(
        &self,
        employer_id: &str,
        job_id: &str,
        status: JobStatus,
    ) -> Result<Job, ClientError> {
        let call = self
            .request_as(Method::PATCH, &["jobs", job_id, "status"], employer_id)?
            .json(&JobStatusUpdate { status });
        self.send_json(call).await
    }

    #[instrument(skip(self, request))]
    pub async fn apply_to_job(
        &self,
        candidate_id: &str,
        job_id: &str,
        request: &ApplyRequest,
    ) -> Result<JobApplication, ClientError> {
        let body = NewApplication {
            candidate_id,
            cover_letter: request.cover_letter.as_deref(),
        };
        let call = self
            .request_as(Method::POST, &["jobs", job_id, "applications"], candidate_id)?
            .json(&body);
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn job_applications(
        &self,
        employer_id: &str,
        job_id: &str,
    ) -> Result<Vec<JobApplication>, ClientError> {
        let call = self.request_as(Method::GET, &["jobs", job_id, "applications"], employer_id)?;
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn candidate_applications(
        &self,
        candidate_id: &str,
    ) -> Result<Vec<JobApplication>, ClientError> {
        let call = self.request_as(
            Method::GET,
            &["candidates", candidate_id, "applications"],
            candidate_id,
        )?;
        self.send_json(call).await
    }

    /// Contract text is produced by the backend.
    #[instrument(skip(self, request))]
    pub async fn generate_contract(
        &self,
        employer_id: &str,
        application_id: &str,
        request: &GenerateContractRequest,
    ) -> Result<Contract, ClientError> {
        let call = self
            .request_as(
                Method::POST,
                &["applications", application_id, "contract"],
                employer_id,
            )?
            .json(request);
        self.send_json(call).await
    }
}

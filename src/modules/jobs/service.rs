use tracing::{info, instrument};

use staffee_core::AppError;
use staffee_models::jobs::{
    ApplyRequest, CreateJobDto, Job, JobApplication, JobFilter, UpdateJobDto,
};

use crate::state::AppState;
use crate::utils::backend::upstream;

pub struct JobService;

impl JobService {
    pub async fn list_jobs(state: &AppState, filter: &JobFilter) -> Result<Vec<Job>, AppError> {
        state.backend.list_jobs(filter).await.map_err(upstream)
    }

    pub async fn get_job(state: &AppState, job_id: &str) -> Result<Job, AppError> {
        state.backend.job(job_id).await.map_err(upstream)
    }

    #[instrument(skip(state, dto))]
    pub async fn create_job(
        state: &AppState,
        employer_id: &str,
        dto: &CreateJobDto,
    ) -> Result<Job, AppError> {
        let job = state
            .backend
            .create_job(employer_id, dto)
            .await
            .map_err(upstream)?;
        info!(job_id = %job.id, "Job posted");
        Ok(job)
    }

    pub async fn update_job(
        state: &AppState,
        employer_id: &str,
        job_id: &str,
        dto: &UpdateJobDto,
    ) -> Result<Job, AppError> {
        state
            .backend
            .update_job(employer_id, job_id, dto)
            .await
            .map_err(upstream)
    }

    pub async fn delete_job(
        state: &AppState,
        employer_id: &str,
        job_id: &str,
    ) -> Result<(), AppError> {
        state
            .backend
            .delete_job(employer_id, job_id)
            .await
            .map_err(upstream)
    }

    /// Flips open/closed. Only the posting employer may do this.
    #[instrument(skip(state))]
    pub async fn toggle_status(
        state: &AppState,
        employer_id: &str,
        job_id: &str,
    ) -> Result<Job, AppError> {
        let job = Self::get_job(state, job_id).await?;

        if job.employer_id != employer_id {
            return Err(AppError::forbidden(
                "Only the employer who posted this job can change its status".to_string(),
            ));
        }

        let next = job.status.toggled();
        let job = state
            .backend
            .set_job_status(employer_id, job_id, next)
            .await
            .map_err(upstream)?;
        info!(status = next.as_str(), "Job status changed");
        Ok(job)
    }

    #[instrument(skip(state, dto))]
    pub async fn apply(
        state: &AppState,
        candidate_id: &str,
        job_id: &str,
        dto: &ApplyRequest,
    ) -> Result<JobApplication, AppError> {
        state
            .backend
            .apply_to_job(candidate_id, job_id, dto)
            .await
            .map_err(upstream)
    }

    pub async fn job_applications(
        state: &AppState,
        employer_id: &str,
        job_id: &str,
    ) -> Result<Vec<JobApplication>, AppError> {
        state
            .backend
            .job_applications(employer_id, job_id)
            .await
            .map_err(upstream)
    }
}

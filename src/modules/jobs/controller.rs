use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::jobs::{
    ApplyRequest, CreateJobDto, Job, JobApplication, JobFilter, UpdateJobDto,
};

use crate::docs::ErrorResponse;
use crate::middleware::auth::{RequireCandidate, RequireEmployer, SessionUser};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::JobService;

/// Search jobs
#[utoipa::path(
    get,
    path = "/api/jobs",
    params(JobFilter),
    responses(
        (status = 200, description = "Matching jobs", body = Vec<Job>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, _user))]
pub async fn list_jobs(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(filter): Query<JobFilter>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = JobService::list_jobs(&state, &filter).await?;
    Ok(Json(jobs))
}

/// Post a job
#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job created", body = Job),
        (status = 403, description = "Employers only", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, dto))]
pub async fn create_job(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    ValidatedJson(dto): ValidatedJson<CreateJobDto>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = JobService::create_job(&state, user.user_id(), &dto).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Get a job
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job", body = Job),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, _user))]
pub async fn get_job(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = JobService::get_job(&state, &id).await?;
    Ok(Json(job))
}

/// Update a job
#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job id")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Job updated", body = Job),
        (status = 403, description = "Employers only", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, dto))]
pub async fn update_job(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateJobDto>,
) -> Result<Json<Job>, AppError> {
    let job = JobService::update_job(&state, user.user_id(), &id, &dto).await?;
    Ok(Json(job))
}

/// Delete a job
#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job id")),
    responses(
        (status = 204, description = "Job deleted"),
        (status = 403, description = "Employers only", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    JobService::delete_job(&state, user.user_id(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Open a closed job or close an open one
#[utoipa::path(
    patch,
    path = "/api/jobs/{id}/status",
    params(("id" = String, Path, description = "Job id")),
    responses(
        (status = 200, description = "Job with its new status", body = Job),
        (status = 403, description = "Not the posting employer", body = ErrorResponse),
        (status = 404, description = "Job not found", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state))]
pub async fn toggle_status(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = JobService::toggle_status(&state, user.user_id(), &id).await?;
    Ok(Json(job))
}

/// Apply to a job
#[utoipa::path(
    post,
    path = "/api/jobs/{id}/apply",
    params(("id" = String, Path, description = "Job id")),
    request_body = ApplyRequest,
    responses(
        (status = 201, description = "Application submitted", body = JobApplication),
        (status = 403, description = "Candidates only", body = ErrorResponse),
        (status = 409, description = "Already applied or job closed", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state, dto))]
pub async fn apply_to_job(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<ApplyRequest>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let application = JobService::apply(&state, user.user_id(), &id, &dto).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// Applications received for a job
#[utoipa::path(
    get,
    path = "/api/jobs/{id}/applications",
    params(("id" = String, Path, description = "Job id")),
    responses(
        (status = 200, description = "Applications", body = Vec<JobApplication>),
        (status = 403, description = "Employers only", body = ErrorResponse)
    ),
    tag = "Jobs"
)]
#[instrument(skip(state))]
pub async fn get_job_applications(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    Path(id): Path<String>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let applications = JobService::job_applications(&state, user.user_id(), &id).await?;
    Ok(Json(applications))
}

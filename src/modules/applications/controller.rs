use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::jobs::{Contract, GenerateContractRequest, JobApplication};

use crate::docs::ErrorResponse;
use crate::middleware::auth::{RequireCandidate, RequireEmployer};
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::ApplicationService;

/// The signed-in candidate's applications
#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "Applications", body = Vec<JobApplication>),
        (status = 403, description = "Candidates only", body = ErrorResponse)
    ),
    tag = "Applications"
)]
#[instrument(skip(state))]
pub async fn get_my_applications(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let applications = ApplicationService::candidate_applications(&state, user.user_id()).await?;
    Ok(Json(applications))
}

/// Generate an employment contract for an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/contract",
    params(("id" = String, Path, description = "Application id")),
    request_body = GenerateContractRequest,
    responses(
        (status = 201, description = "Contract generated", body = Contract),
        (status = 403, description = "Employers only", body = ErrorResponse),
        (status = 404, description = "Application not found", body = ErrorResponse)
    ),
    tag = "Applications"
)]
#[instrument(skip(state, dto))]
pub async fn generate_contract(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<GenerateContractRequest>,
) -> Result<(StatusCode, Json<Contract>), AppError> {
    let contract = ApplicationService::generate_contract(&state, user.user_id(), &id, &dto).await?;
    Ok((StatusCode::CREATED, Json(contract)))
}

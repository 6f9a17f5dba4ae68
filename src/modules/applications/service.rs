use tracing::{info, instrument};

use staffee_core::AppError;
use staffee_models::jobs::{Contract, GenerateContractRequest, JobApplication};

use crate::state::AppState;
use crate::utils::backend::upstream;

pub struct ApplicationService;

impl ApplicationService {
    pub async fn candidate_applications(
        state: &AppState,
        candidate_id: &str,
    ) -> Result<Vec<JobApplication>, AppError> {
        state
            .backend
            .candidate_applications(candidate_id)
            .await
            .map_err(upstream)
    }

    #[instrument(skip(state, dto))]
    pub async fn generate_contract(
        state: &AppState,
        employer_id: &str,
        application_id: &str,
        dto: &GenerateContractRequest,
    ) -> Result<Contract, AppError> {
        let contract = state
            .backend
            .generate_contract(employer_id, application_id, dto)
            .await
            .map_err(upstream)?;
        info!(job_id = %contract.job_id, "Contract generated");
        Ok(contract)
    }
}

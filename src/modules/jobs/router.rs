use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

use super::controller::{
    apply_to_job, create_job, delete_job, get_job, get_job_applications, list_jobs, toggle_status,
    update_job,
};

pub fn init_jobs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/{id}", get(get_job).put(update_job).delete(delete_job))
        .route("/{id}/status", patch(toggle_status))
        .route("/{id}/apply", post(apply_to_job))
        .route("/{id}/applications", get(get_job_applications))
}

use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{generate_blog_post, generate_job_description};

pub fn init_ai_router() -> Router<AppState> {
    Router::new()
        .route("/job-description", post(generate_job_description))
        .route("/blog-post", post(generate_blog_post))
}

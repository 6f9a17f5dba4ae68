use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{candidate_dashboard, employer_dashboard, login_page, signup_page};

pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page))
        .route("/signup", get(signup_page))
        .route("/candidate", get(candidate_dashboard))
        .route("/employer", get(employer_dashboard))
}

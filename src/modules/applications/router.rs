use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{generate_contract, get_my_applications};

pub fn init_applications_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_my_applications))
        .route("/{id}/contract", post(generate_contract))
}

use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::submit_contact;

pub fn init_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

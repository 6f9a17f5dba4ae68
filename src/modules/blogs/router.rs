use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_blog, delete_blog, get_blog, list_blogs};

pub fn init_blogs_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/{id}", get(get_blog).delete(delete_blog))
}

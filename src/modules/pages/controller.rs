use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use tracing::instrument;

use crate::middleware::auth::{RequireCandidate, RequireEmployer};
use crate::state::AppState;

use super::service::PageService;

pub async fn login_page() -> Html<String> {
    Html(PageService::render_login())
}

pub async fn signup_page() -> Html<String> {
    Html(PageService::render_signup())
}

#[instrument(skip(state))]
pub async fn candidate_dashboard(
    State(state): State<AppState>,
    RequireCandidate(user): RequireCandidate,
) -> Html<String> {
    let identity = PageService::cached_identity(&state, user.user_id()).await;
    Html(PageService::render_dashboard(&user.0, identity.as_ref()))
}

#[instrument(skip(state))]
pub async fn employer_dashboard(
    State(state): State<AppState>,
    RequireEmployer(user): RequireEmployer,
) -> Html<String> {
    let identity = PageService::cached_identity(&state, user.user_id()).await;
    Html(PageService::render_dashboard(&user.0, identity.as_ref()))
}

pub async fn not_found_page(uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(PageService::render_not_found(uri.path())),
    )
}

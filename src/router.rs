use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use staffee_core::AppError;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::route_guard::route_guard;
use crate::modules::ai::router::init_ai_router;
use crate::modules::applications::router::init_applications_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::blogs::router::init_blogs_router;
use crate::modules::contact::router::init_contact_router;
use crate::modules::health::health_check;
use crate::modules::jobs::router::init_jobs_router;
use crate::modules::pages::controller::not_found_page;
use crate::modules::pages::router::init_pages_router;
use crate::modules::profiles::router::init_profiles_router;
use crate::state::AppState;

async fn api_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Route not found"))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", init_auth_router())
        .nest("/profile", init_profiles_router())
        .nest("/jobs", init_jobs_router())
        .nest("/applications", init_applications_router())
        .nest("/blogs", init_blogs_router())
        .nest("/ai", init_ai_router())
        .nest("/contact", init_contact_router())
        .fallback(api_not_found);

    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/health", get(health_check))
        .merge(init_pages_router())
        .nest("/api", api)
        .fallback(not_found_page)
        .layer(middleware::from_fn_with_state(state.clone(), route_guard))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

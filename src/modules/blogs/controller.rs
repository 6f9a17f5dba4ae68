use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use staffee_core::AppError;
use staffee_models::blogs::{Blog, CreateBlogDto};

use crate::docs::ErrorResponse;
use crate::middleware::auth::SessionUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::BlogService;

/// List blog posts
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blog posts", body = Vec<Blog>),
        (status = 401, description = "Not signed in", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state, _user))]
pub async fn list_blogs(
    State(state): State<AppState>,
    _user: SessionUser,
) -> Result<Json<Vec<Blog>>, AppError> {
    let blogs = BlogService::list_blogs(&state).await?;
    Ok(Json(blogs))
}

/// Publish a blog post
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogDto,
    responses(
        (status = 201, description = "Blog post created", body = Blog),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state, dto))]
pub async fn create_blog(
    State(state): State<AppState>,
    user: SessionUser,
    ValidatedJson(dto): ValidatedJson<CreateBlogDto>,
) -> Result<(StatusCode, Json<Blog>), AppError> {
    let blog = BlogService::create_blog(&state, user.user_id(), &dto).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

/// Get a blog post
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog post", body = Blog),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state, _user))]
pub async fn get_blog(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<String>,
) -> Result<Json<Blog>, AppError> {
    let blog = BlogService::get_blog(&state, &id).await?;
    Ok(Json(blog))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 204, description = "Blog post deleted"),
        (status = 403, description = "Not the author", body = ErrorResponse),
        (status = 404, description = "Blog post not found", body = ErrorResponse)
    ),
    tag = "Blogs"
)]
#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    user: SessionUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    BlogService::delete_blog(&state, user.user_id(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

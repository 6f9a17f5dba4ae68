use tracing::instrument;

use staffee_core::AppError;
use staffee_models::blogs::{Blog, CreateBlogDto};

use crate::state::AppState;
use crate::utils::backend::upstream;

pub struct BlogService;

impl BlogService {
    pub async fn list_blogs(state: &AppState) -> Result<Vec<Blog>, AppError> {
        state.backend.list_blogs().await.map_err(upstream)
    }

    pub async fn get_blog(state: &AppState, blog_id: &str) -> Result<Blog, AppError> {
        state.backend.blog(blog_id).await.map_err(upstream)
    }

    #[instrument(skip(state, dto), fields(title = %dto.title))]
    pub async fn create_blog(
        state: &AppState,
        author_id: &str,
        dto: &CreateBlogDto,
    ) -> Result<Blog, AppError> {
        state
            .backend
            .create_blog(author_id, dto)
            .await
            .map_err(upstream)
    }

    /// Authorship is checked by the backend.
    pub async fn delete_blog(
        state: &AppState,
        author_id: &str,
        blog_id: &str,
    ) -> Result<(), AppError> {
        state
            .backend
            .delete_blog(author_id, blog_id)
            .await
            .map_err(upstream)
    }
}

use reqwest::Method;
use tracing::instrument;

use staffee_models::blogs::{Blog, CreateBlogDto, NewBlog};

use crate::client::BackendClient;
use crate::error::ClientError;

impl BackendClient {
    #[instrument(skip(self))]
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, ClientError> {
        let call = self.request(Method::GET, &["blogs"])?;
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn blog(&self, blog_id: &str) -> Result<Blog, ClientError> {
        let call = self.request(Method::GET, &["blogs", blog_id])?;
        self.send_json(call).await
    }

    #[instrument(skip(self, blog), fields(title = %blog.title))]
    pub async fn create_blog(&self, author_id: &str, blog: &CreateBlogDto) -> Result<Blog, ClientError> {
        let call = self
            .request_as(Method::POST, &["blogs"], author_id)?
            .json(&NewBlog { author_id, blog });
        self.send_json(call).await
    }

    #[instrument(skip(self))]
    pub async fn delete_blog(&self, author_id: &str, blog_id: &str) -> Result<(), ClientError> {
        let call = self.request_as(Method::DELETE, &["blogs", blog_id], author_id)?;
        self.send_empty(call).await
    }
}

use async_trait::async_trait;

use star_shared::{ApiResponse, PageRequest, PaginatedResponse, SearchParams, StatusResponse};

use super::AuthToken;
use crate::domain::{NewPost, Post, PostCategory, PostPatch};
use crate::error::RepoError;

/// A resolved list query.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub category: Option<PostCategory>,
    pub author_id: Option<String>,
    pub search: SearchParams,
    pub page: PageRequest,
}

/// Post storage backend: in-memory fixtures or a remote API.
///
/// Every call may suspend. Credentials are passed through untouched.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// List posts matching the query, one page at a time.
    async fn list(&self, query: &PostQuery) -> Result<PaginatedResponse<Post>, RepoError>;

    /// Find a post by its ID.
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Post>, RepoError>;

    async fn create(&self, post: NewPost, token: &AuthToken)
    -> Result<ApiResponse<Post>, RepoError>;

    async fn update(
        &self,
        id: &str,
        patch: PostPatch,
        token: &AuthToken,
    ) -> Result<ApiResponse<Post>, RepoError>;

    async fn delete(&self, id: &str, token: &AuthToken) -> Result<StatusResponse, RepoError>;

    /// Add one like to a post.
    async fn like(&self, id: &str, token: &AuthToken) -> Result<StatusResponse, RepoError>;
}

//! Post data access.

use std::sync::Arc;

use star_shared::{ApiResponse, PaginatedResponse, PaginationParams, SearchParams, StatusResponse};

use crate::domain::{CreatePostInput, Post, PostCategory, UpdatePostInput};
use crate::error::{DomainError, RepoError};
use crate::ports::{AuthToken, PostQuery, PostRepository};

/// Query and mutation front for posts.
///
/// Checks credentials, required fields and pagination arguments, then
/// dispatches to the repository chosen at startup. Nothing reaches the
/// repository when a check fails.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// List one page of posts in a category.
    pub async fn list_posts(
        &self,
        category: PostCategory,
        search: &SearchParams,
        pagination: &PaginationParams,
    ) -> Result<PaginatedResponse<Post>, DomainError> {
        let query = PostQuery {
            category: Some(category),
            author_id: None,
            search: search.clone(),
            page: pagination.page_request()?,
        };
        tracing::debug!(
            category = %category,
            page = query.page.page(),
            page_size = query.page.page_size(),
            "Listing posts"
        );

        self.repo
            .list(&query)
            .await
            .map_err(|e| into_domain(e, category.as_str()))
    }

    /// List one page of posts written by a user.
    pub async fn list_posts_by_author(
        &self,
        author_id: &str,
        pagination: &PaginationParams,
    ) -> Result<PaginatedResponse<Post>, DomainError> {
        let author_id = require_id(author_id, "authorId")?;
        let query = PostQuery {
            author_id: Some(author_id.to_string()),
            page: pagination.page_request()?,
            ..Default::default()
        };
        tracing::debug!(author_id, "Listing posts by author");

        self.repo
            .list(&query)
            .await
            .map_err(|e| into_domain(e, author_id))
    }

    pub async fn get_post(&self, id: &str) -> Result<ApiResponse<Post>, DomainError> {
        let id = require_id(id, "id")?;
        tracing::debug!(post_id = id, "Fetching post");

        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| into_domain(e, id))
    }

    pub async fn create_post(
        &self,
        input: CreatePostInput,
        token: Option<&AuthToken>,
    ) -> Result<ApiResponse<Post>, DomainError> {
        let token = require_token(token)?;
        let new_post = input.validate()?;
        tracing::info!(category = %new_post.category, "Creating post");

        self.repo
            .create(new_post, token)
            .await
            .map_err(|e| into_domain(e, "new"))
    }

    pub async fn update_post(
        &self,
        id: &str,
        input: UpdatePostInput,
        token: Option<&AuthToken>,
    ) -> Result<ApiResponse<Post>, DomainError> {
        let token = require_token(token)?;
        let id = require_id(id, "id")?;
        let patch = input.validate()?;
        tracing::info!(post_id = id, "Updating post");

        self.repo
            .update(id, patch, token)
            .await
            .map_err(|e| into_domain(e, id))
    }

    pub async fn delete_post(
        &self,
        id: &str,
        token: Option<&AuthToken>,
    ) -> Result<StatusResponse, DomainError> {
        let token = require_token(token)?;
        let id = require_id(id, "id")?;
        tracing::info!(post_id = id, "Deleting post");

        self.repo
            .delete(id, token)
            .await
            .map_err(|e| into_domain(e, id))
    }

    pub async fn like_post(
        &self,
        id: &str,
        token: Option<&AuthToken>,
    ) -> Result<StatusResponse, DomainError> {
        let token = require_token(token)?;
        let id = require_id(id, "id")?;
        tracing::debug!(post_id = id, "Liking post");

        self.repo
            .like(id, token)
            .await
            .map_err(|e| into_domain(e, id))
    }
}

fn require_token(token: Option<&AuthToken>) -> Result<&AuthToken, DomainError> {
    token.ok_or_else(DomainError::login_required)
}

fn require_id<'a>(id: &'a str, field: &str) -> Result<&'a str, DomainError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(DomainError::missing_fields(&[field]));
    }
    Ok(id)
}

fn into_domain(err: RepoError, id: &str) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        },
        RepoError::Unauthorized(msg) => DomainError::Unauthorized(msg),
        RepoError::InvalidArgument(msg) => DomainError::InvalidArgument(msg),
        RepoError::Rejected(msg) => DomainError::Validation {
            message: msg,
            fields: Vec::new(),
        },
        RepoError::Upstream { status, message } => {
            tracing::error!(status, %message, "Upstream request failed");
            DomainError::Upstream {
                status: Some(status),
                message,
            }
        }
        RepoError::Transport(msg) | RepoError::Decode(msg) => {
            tracing::error!(error = %msg, "Backend unreachable or returned garbage");
            DomainError::Upstream {
                status: None,
                message: msg,
            }
        }
    }
}

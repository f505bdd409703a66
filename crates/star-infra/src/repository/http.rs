//! Remote REST backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use star_core::domain::{NewPost, Post, PostPatch};
use star_core::error::RepoError;
use star_core::ports::{AuthToken, PostQuery, PostRepository};
use star_shared::{ApiResponse, PaginatedResponse, StatusResponse};

/// Error body sent by the API. Only the message is read.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Post repository backed by the forum REST API.
///
/// Payloads are passed through as the server sent them; failures are
/// translated into [`RepoError`] using the server message when present.
pub struct HttpPostRepository {
    client: Client,
    base_url: Url,
}

impl HttpPostRepository {
    pub fn new(base_url: &str) -> Result<Self, RepoError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, RepoError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RepoError::InvalidArgument(format!("invalid API URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RepoError::InvalidArgument(format!(
                "API URL cannot be a base: {base_url}"
            )));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, RepoError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RepoError::InvalidArgument("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn list_params(query: &PostQuery) -> Result<Vec<(&'static str, String)>, RepoError> {
        let mut params = Vec::new();
        if let Some(category) = query.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(author_id) = &query.author_id {
            params.push(("authorId", author_id.clone()));
        }
        params.push(("page", query.page.page().to_string()));
        params.push(("pageSize", query.page.page_size().to_string()));

        let search = &query.search;
        if let Some(sort_by) = &search.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_order) = search.sort_order {
            params.push(("sortOrder", sort_order.as_str().to_string()));
        }
        if let Some(text) = search.text_query() {
            params.push(("query", text.to_string()));
        }
        if !search.filters.is_empty() {
            let filters = serde_json::to_string(&search.filters)
                .map_err(|e| RepoError::InvalidArgument(e.to_string()))?;
            params.push(("filters", filters));
        }
        Ok(params)
    }

    async fn send<T>(&self, request: RequestBuilder, fallback: &str) -> Result<T, RepoError>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| RepoError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string());
            tracing::debug!(status = status.as_u16(), %message, "API request failed");

            return Err(status_error(status.as_u16(), message));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RepoError::Decode(e.to_string()))?;
        if body.get("success") == Some(&Value::Bool(false)) {
            let status = body
                .get("code")
                .and_then(Value::as_u64)
                .and_then(|c| u16::try_from(c).ok())
                .unwrap_or(status.as_u16());
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string();
            tracing::debug!(status, %message, "API reported failure");
            return Err(status_error(status, message));
        }

        serde_json::from_value(body).map_err(|e| RepoError::Decode(e.to_string()))
    }
}

/// Map a failure code, from the HTTP status or the envelope, to a repo error.
fn status_error(status: u16, message: String) -> RepoError {
    match status {
        404 => RepoError::NotFound,
        401 => RepoError::Unauthorized(message),
        _ => RepoError::Upstream { status, message },
    }
}

#[async_trait]
impl PostRepository for HttpPostRepository {
    async fn list(&self, query: &PostQuery) -> Result<PaginatedResponse<Post>, RepoError> {
        let url = self.endpoint(&["posts"])?;
        let params = Self::list_params(query)?;
        let request = self.client.get(url).query(&params);

        self.send(request, "Failed to fetch posts").await
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Post>, RepoError> {
        let url = self.endpoint(&["posts", id])?;

        self.send(self.client.get(url), "Failed to fetch post").await
    }

    async fn create(
        &self,
        post: NewPost,
        token: &AuthToken,
    ) -> Result<ApiResponse<Post>, RepoError> {
        let url = self.endpoint(&["posts"])?;
        let request = self
            .client
            .post(url)
            .bearer_auth(token.expose())
            .json(&post);

        self.send(request, "Failed to create post").await
    }

    async fn update(
        &self,
        id: &str,
        patch: PostPatch,
        token: &AuthToken,
    ) -> Result<ApiResponse<Post>, RepoError> {
        let url = self.endpoint(&["posts", id])?;
        let request = self
            .client
            .patch(url)
            .bearer_auth(token.expose())
            .json(&patch);

        self.send(request, "Failed to update post").await
    }

    async fn delete(&self, id: &str, token: &AuthToken) -> Result<StatusResponse, RepoError> {
        let url = self.endpoint(&["posts", id])?;
        let request = self.client.delete(url).bearer_auth(token.expose());

        self.send(request, "Failed to delete post").await
    }

    async fn like(&self, id: &str, token: &AuthToken) -> Result<StatusResponse, RepoError> {
        let url = self.endpoint(&["posts", id, "like"])?;
        let request = self.client.post(url).bearer_auth(token.expose());

        self.send(request, "Failed to like post").await
    }
}

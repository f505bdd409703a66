//! In-memory fixture backend - used until a real API is available.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use star_core::domain::{NewPost, Post, PostAuthor, PostPatch};
use star_core::error::RepoError;
use star_core::ports::{AuthToken, PostQuery, PostRepository};
use star_shared::{ApiResponse, PaginatedResponse, SearchParams, SortOrder, StatusResponse};

use super::latency::LatencyWindow;
use crate::fixtures::{fixture_authors, fixture_posts};

/// Fixture backend configuration.
#[derive(Debug, Clone, Default)]
pub struct FixtureConfig {
    /// Delay applied before every operation.
    pub latency: LatencyWindow,
    /// Probability in `[0, 1]` that an operation fails with a simulated 500.
    pub failure_rate: f64,
}

impl FixtureConfig {
    /// No latency, no failures. Handy for tests.
    pub fn instant() -> Self {
        Self {
            latency: LatencyWindow::none(),
            failure_rate: 0.0,
        }
    }
}

/// In-memory post store seeded with fixture data.
///
/// Reads are deterministic. Creates append, updates merge in place and
/// deletes are acknowledged without removing anything.
/// Note: Data is lost on process restart.
pub struct FixturePostRepository {
    posts: RwLock<Vec<Post>>,
    author: PostAuthor,
    config: FixtureConfig,
}

impl FixturePostRepository {
    /// Seeded store. New posts are attributed to the first fixture user.
    pub fn new(config: FixtureConfig) -> Self {
        let author = fixture_authors()
            .into_iter()
            .next()
            .unwrap_or_else(|| PostAuthor {
                id: "user-1".to_string(),
                username: "john_doe".to_string(),
                avatar: None,
                level: 1,
            });
        Self::with_posts(fixture_posts(), author, config)
    }

    pub fn with_posts(posts: Vec<Post>, author: PostAuthor, config: FixtureConfig) -> Self {
        let failure_rate = config.failure_rate.clamp(0.0, 1.0);
        Self {
            posts: RwLock::new(posts),
            author,
            config: FixtureConfig {
                failure_rate,
                ..config
            },
        }
    }

    async fn simulate(&self, operation: &'static str) -> Result<(), RepoError> {
        self.config.latency.wait().await;

        let fail = self.config.failure_rate > 0.0
            && rand::thread_rng().gen_bool(self.config.failure_rate);
        if fail {
            tracing::warn!(operation, "Injecting simulated fixture failure");
            return Err(RepoError::Upstream {
                status: 500,
                message: "Simulated API error".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for FixturePostRepository {
    fn default() -> Self {
        Self::new(FixtureConfig::default())
    }
}

fn matches(post: &Post, query: &PostQuery) -> bool {
    if query.category.is_some_and(|c| c != post.category) {
        return false;
    }
    if query
        .author_id
        .as_deref()
        .is_some_and(|id| id != post.author.id)
    {
        return false;
    }
    if let Some(text) = query.search.text_query() {
        let needle = text.to_lowercase();
        if !post.title.to_lowercase().contains(&needle)
            && !post.content.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    // Unknown filter keys are ignored.
    query
        .search
        .filters
        .iter()
        .all(|(key, value)| match key.as_str() {
            "status" => value.matches_str(post.status.as_str()),
            "category" => value.matches_str(post.category.as_str()),
            "authorId" => value.matches_str(&post.author.id),
            _ => true,
        })
}

/// Tag a single-item response with `timestamp` and `requestId` meta.
fn stamped<T>(response: ApiResponse<T>) -> ApiResponse<T> {
    response
        .with_meta("timestamp", Utc::now().to_rfc3339())
        .with_meta("requestId", format!("req-{}", Uuid::new_v4()))
}

fn compare(a: &Post, b: &Post, sort_by: &str) -> Ordering {
    match sort_by {
        "updatedAt" => a.updated_at.cmp(&b.updated_at),
        "views" => a.stats.views.cmp(&b.stats.views),
        "likes" => a.stats.likes.cmp(&b.stats.likes),
        "stars" => a.stats.stars.cmp(&b.stats.stars),
        "replies" => a.stats.replies.cmp(&b.stats.replies),
        "title" => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        _ => a.created_at.cmp(&b.created_at),
    }
    .then_with(|| a.id.cmp(&b.id))
}

fn sort_posts(posts: &mut [Post], search: &SearchParams) {
    let sort_by = search.sort_by.as_deref().unwrap_or("createdAt");
    match search.sort_order.unwrap_or_default() {
        SortOrder::Asc => posts.sort_by(|a, b| compare(a, b, sort_by)),
        SortOrder::Desc => posts.sort_by(|a, b| compare(b, a, sort_by)),
    }
}

#[async_trait]
impl PostRepository for FixturePostRepository {
    async fn list(&self, query: &PostQuery) -> Result<PaginatedResponse<Post>, RepoError> {
        self.simulate("list").await?;

        let mut matching: Vec<Post> = {
            let posts = self.posts.read().await;
            posts.iter().filter(|p| matches(p, query)).cloned().collect()
        };
        sort_posts(&mut matching, &query.search);
        tracing::debug!(matched = matching.len(), "Fixture list");

        Ok(PaginatedResponse::from_request(matching, query.page, None))
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<Post>, RepoError> {
        self.simulate("find_by_id").await?;

        let posts = self.posts.read().await;
        posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .map(|post| stamped(ApiResponse::ok(post)))
            .ok_or(RepoError::NotFound)
    }

    async fn create(
        &self,
        post: NewPost,
        _token: &AuthToken,
    ) -> Result<ApiResponse<Post>, RepoError> {
        self.simulate("create").await?;

        let post = Post::new(self.author.clone(), post);
        self.posts.write().await.insert(0, post.clone());
        tracing::debug!(post_id = %post.id, "Fixture post created");

        Ok(stamped(ApiResponse::created(post)))
    }

    async fn update(
        &self,
        id: &str,
        patch: PostPatch,
        _token: &AuthToken,
    ) -> Result<ApiResponse<Post>, RepoError> {
        self.simulate("update").await?;

        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        if let Some(next) = patch.status {
            if !post.status.can_transition_to(next) {
                return Err(RepoError::Rejected(format!(
                    "Cannot move a {} post back to {}",
                    post.status, next
                )));
            }
        }
        post.apply(patch);

        Ok(stamped(ApiResponse::ok(post.clone())))
    }

    async fn delete(&self, id: &str, _token: &AuthToken) -> Result<StatusResponse, RepoError> {
        self.simulate("delete").await?;

        let exists = self.posts.read().await.iter().any(|p| p.id == id);
        if !exists {
            return Err(RepoError::NotFound);
        }
        Ok(StatusResponse::ok("Post deleted successfully"))
    }

    async fn like(&self, id: &str, _token: &AuthToken) -> Result<StatusResponse, RepoError> {
        self.simulate("like").await?;

        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.record_like();

        Ok(StatusResponse::ok("Post liked"))
    }
}

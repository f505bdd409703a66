use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::PostAuthor;
use crate::error::DomainError;

/// Which board a post belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostCategory {
    HousingRequest,
    Sublet,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::HousingRequest => "housing-request",
            PostCategory::Sublet => "sublet",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post lifecycle. Only moves forward: draft, published, archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }

    /// Whether a post in this status may be moved to `next`.
    pub fn can_transition_to(self, next: PostStatus) -> bool {
        next >= self
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Denormalized engagement counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    pub views: u64,
    pub likes: u64,
    pub stars: u64,
    pub replies: u64,
}

/// Post entity - a housing request or sublet listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: PostAuthor,
    pub stats: PostStats,
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Post {
    /// Create a new post with a generated ID, zeroed counters and timestamps.
    pub fn new(author: PostAuthor, input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Self::generate_id(),
            created_at: now,
            updated_at: now,
            author,
            stats: PostStats::default(),
            title: input.title,
            content: input.content,
            category: input.category,
            status: input.status,
            images: input.images,
        }
    }

    /// Collision resistant post identifier.
    pub fn generate_id() -> String {
        format!("post-{}", Uuid::new_v4())
    }

    /// Merge a partial update. Status transitions are checked by the caller.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        self.updated_at = Utc::now().max(self.created_at);
    }

    pub fn record_like(&mut self) {
        self.stats.likes = self.stats.likes.saturating_add(1);
    }
}

/// Post data as submitted by a client, before validation.
///
/// Every field may be absent on the wire so that validation can report all
/// missing fields at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PostCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl CreatePostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: PostCategory) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: Some(category),
            ..Default::default()
        }
    }

    /// Check required fields and produce a [`NewPost`].
    pub fn validate(self) -> Result<NewPost, DomainError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        if self.category.is_none() {
            missing.push("category");
        }

        let Some(category) = self.category.filter(|_| missing.is_empty()) else {
            return Err(DomainError::missing_fields(&missing));
        };

        let status = self.status.unwrap_or(PostStatus::Published);
        if status == PostStatus::Archived {
            return Err(DomainError::invalid(
                "status",
                "A new post must be a draft or published",
            ));
        }

        Ok(NewPost {
            title: self.title,
            content: self.content,
            category,
            status,
            images: self.images.unwrap_or_default(),
        })
    }
}

/// Partial update, all fields optional. Category cannot change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl UpdatePostInput {
    /// Reject fields that are present but blank.
    pub fn validate(self) -> Result<PostPatch, DomainError> {
        let mut blank = Vec::new();
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            blank.push("title");
        }
        if self.content.as_deref().is_some_and(|c| c.trim().is_empty()) {
            blank.push("content");
        }
        if !blank.is_empty() {
            return Err(DomainError::missing_fields(&blank));
        }

        Ok(PostPatch {
            title: self.title,
            content: self.content,
            status: self.status,
            images: self.images,
        })
    }
}

/// Validated create request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub category: PostCategory,
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> PostAuthor {
        PostAuthor {
            id: "user-1".to_string(),
            username: "john_doe".to_string(),
            avatar: None,
            level: 5,
        }
    }

    #[test]
    fn test_status_moves_forward_only() {
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Published));
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Archived));
        assert!(PostStatus::Published.can_transition_to(PostStatus::Archived));
        assert!(PostStatus::Published.can_transition_to(PostStatus::Published));
        assert!(!PostStatus::Archived.can_transition_to(PostStatus::Published));
        assert!(!PostStatus::Published.can_transition_to(PostStatus::Draft));
    }

    #[test]
    fn test_create_input_reports_every_missing_field() {
        let err = CreatePostInput::default().validate().unwrap_err();
        match err {
            DomainError::Validation { fields, .. } => {
                assert_eq!(fields, vec!["title", "content", "category"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_input_defaults_to_published() {
        let new_post = CreatePostInput::new("Room", "Near campus", PostCategory::Sublet)
            .validate()
            .unwrap();
        assert_eq!(new_post.status, PostStatus::Published);
        assert!(new_post.images.is_empty());
    }

    #[test]
    fn test_create_input_rejects_archived() {
        let input = CreatePostInput {
            status: Some(PostStatus::Archived),
            ..CreatePostInput::new("Room", "Near campus", PostCategory::Sublet)
        };
        assert!(matches!(
            input.validate(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_update_input_rejects_blank_title() {
        let input = UpdatePostInput {
            title: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            input.validate(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_new_post_has_fresh_id_and_zero_stats() {
        let input = CreatePostInput::new("Room", "Near campus", PostCategory::Sublet)
            .validate()
            .unwrap();
        let first = Post::new(author(), input.clone());
        let second = Post::new(author(), input);

        assert_ne!(first.id, second.id);
        assert!(first.id.starts_with("post-"));
        assert_eq!(first.stats, PostStats::default());
        assert_eq!(first.created_at, first.updated_at);
    }

    #[test]
    fn test_apply_keeps_timestamps_ordered() {
        let input = CreatePostInput::new("Room", "Near campus", PostCategory::Sublet)
            .validate()
            .unwrap();
        let mut post = Post::new(author(), input);
        post.apply(PostPatch {
            title: Some("Room, updated".to_string()),
            status: Some(PostStatus::Archived),
            ..Default::default()
        });

        assert_eq!(post.title, "Room, updated");
        assert_eq!(post.content, "Near campus");
        assert_eq!(post.status, PostStatus::Archived);
        assert!(post.created_at <= post.updated_at);
    }

    #[test]
    fn test_post_wire_shape() {
        let input = CreatePostInput::new("Room", "Near campus", PostCategory::HousingRequest)
            .validate()
            .unwrap();
        let json = serde_json::to_value(Post::new(author(), input)).unwrap();

        assert_eq!(json["category"], "housing-request");
        assert_eq!(json["status"], "published");
        assert_eq!(json["stats"]["likes"], 0);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("images").is_none());
    }
}

use serde::{Deserialize, Serialize};

/// Forum member, as shown in lists and author info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub level: u32,
}

impl User {
    /// Snapshot of this user for embedding in a post.
    pub fn as_author(&self) -> PostAuthor {
        PostAuthor {
            id: self.id.clone(),
            username: self.username.clone(),
            avatar: self.avatar.clone(),
            level: self.level,
        }
    }
}

/// Read-only author snapshot embedded in a post.
///
/// Copied when the post is written; later profile edits do not reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_snapshot_is_detached() {
        let mut user = User {
            id: "user-1".to_string(),
            username: "john_doe".to_string(),
            email: "john@uwaterloo.ca".to_string(),
            avatar: None,
            level: 5,
        };
        let author = user.as_author();

        user.username = "renamed".to_string();
        user.level = 6;

        assert_eq!(author.username, "john_doe");
        assert_eq!(author.level, 5);
    }
}

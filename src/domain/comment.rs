//! Comment records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{CommentId, PostId};

/// A comment as served by `GET /api/post/comment/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    /// The post this comment belongs to. The server names this field `post`.
    #[serde(alias = "post")]
    pub post_id: PostId,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub dislikes: u32,
}

/// Body of `POST /api/post/comment`. `post` is the bare post key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub post: String,
    pub text: String,
}

impl NewComment {
    pub fn new(post_id: &PostId, text: impl Into<String>) -> Self {
        Self {
            post: post_id.bare().to_string(),
            text: text.into(),
        }
    }
}

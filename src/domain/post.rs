//! Post records and the request bodies that create or like them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::foundation::{CommentId, PostId};

/// A post as served by the listing and single-post endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub heading: String,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// Comment ids in the order the server lists them.
    #[serde(default, alias = "comments")]
    pub comment_ids: Vec<CommentId>,
    #[serde(default)]
    pub likes: u32,
    /// Ids of images uploaded with the post.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Body of `POST /api/post/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub heading: String,
    pub text: String,
}

/// Body of `POST /api/post/like`. `subject` is the full namespaced id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeRequest {
    pub subject: String,
}

/// The `{id}` object returned when a post or comment is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: String,
}

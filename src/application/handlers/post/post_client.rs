//! PostClient - Listing, creating and liking posts.
//!
//! The cached listing is only ever replaced as a whole: a successful fetch
//! installs the new page, anything else installs an empty list. Likes are not
//! applied locally; the like counter is as fresh as the last listing fetch.

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;

use crate::application::{ApiResponse, RequestExecutor, RequestOptions};
use crate::domain::foundation::{ApiError, PostId};
use crate::domain::{CreatedId, LikeRequest, NewPost, Post};
use crate::ports::StateStore;

pub const LATEST_ENDPOINT: &str = "/api/post/latest";
pub const NEW_POST_ENDPOINT: &str = "/api/post/new";
pub const LIKE_ENDPOINT: &str = "/api/post/like";

/// Page fetched after a like to refresh counters.
pub const FIRST_PAGE: u32 = 0;

/// Post operations plus the cached newest-first listing.
pub struct PostClient {
    executor: Arc<RequestExecutor>,
    posts: Arc<dyn StateStore<Vec<Post>>>,
}

impl PostClient {
    pub fn new(executor: Arc<RequestExecutor>, posts: Arc<dyn StateStore<Vec<Post>>>) -> Self {
        Self { executor, posts }
    }

    /// Current cached listing.
    pub fn posts(&self) -> Vec<Post> {
        self.posts.get()
    }

    /// Receiver for listing changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Post>> {
        self.posts.subscribe()
    }

    /// Fetches one page (zero-indexed) of the newest posts.
    ///
    /// Never fails: on any error or malformed body the cache becomes empty
    /// and an empty list is returned.
    pub async fn fetch_latest(&self, page: u32) -> Vec<Post> {
        let endpoint = format!("{}?page={}", LATEST_ENDPOINT, page);

        let posts = match self.executor.execute(&endpoint, RequestOptions::get()).await {
            Ok(ApiResponse::Json(value @ Value::Array(_))) => {
                match serde_json::from_value::<Vec<Post>>(value) {
                    Ok(posts) => posts,
                    Err(e) => {
                        tracing::warn!(page, error = %e, "Post listing contained malformed posts");
                        Vec::new()
                    }
                }
            }
            Ok(other) => {
                tracing::warn!(page, response = ?other, "Unexpected response format for post listing");
                Vec::new()
            }
            Err(error) => {
                tracing::warn!(page, error = %error, "Failed to fetch posts");
                Vec::new()
            }
        };

        self.posts.set(posts.clone());
        posts
    }

    /// Fetches one post by id.
    pub async fn fetch_post(&self, id: &PostId) -> Result<Post, ApiError> {
        let endpoint = format!("/api/post/{}", id.bare());
        self.executor
            .execute_json(&endpoint, RequestOptions::get())
            .await
    }

    /// Creates a post and returns its id.
    pub async fn create(
        &self,
        heading: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<CreatedId, ApiError> {
        let body = NewPost {
            heading: heading.into(),
            text: text.into(),
        };
        let options = RequestOptions::post().with_json_body(&body)?;
        self.executor.execute_json(NEW_POST_ENDPOINT, options).await
    }

    /// Likes a post, then reloads the first page to pick up the new count.
    pub async fn like(&self, id: &PostId) -> Result<(), ApiError> {
        let body = LikeRequest {
            subject: id.as_str().to_string(),
        };
        let options = RequestOptions::post().with_json_body(&body)?;
        self.executor.execute(LIKE_ENDPOINT, options).await?;

        self.fetch_latest(FIRST_PAGE).await;
        Ok(())
    }
}

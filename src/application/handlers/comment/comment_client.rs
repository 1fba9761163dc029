//! CommentClient - Creating and liking comments.

use std::sync::Arc;

use crate::application::handlers::post::LIKE_ENDPOINT;
use crate::application::{RequestExecutor, RequestOptions};
use crate::domain::foundation::{ApiError, CommentId, PostId};
use crate::domain::{CreatedId, LikeRequest, NewComment};

use super::comment_fetcher::COMMENT_ENDPOINT;

/// Comment mutations. Errors are returned to the caller.
pub struct CommentClient {
    executor: Arc<RequestExecutor>,
}

impl CommentClient {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Comments on a post. The server expects the bare post key.
    pub async fn create_comment(
        &self,
        post_id: &PostId,
        text: impl Into<String>,
    ) -> Result<CreatedId, ApiError> {
        let options = RequestOptions::post().with_json_body(&NewComment::new(post_id, text))?;
        self.executor.execute_json(COMMENT_ENDPOINT, options).await
    }

    /// Likes a comment. Nothing is refreshed afterwards.
    pub async fn like_comment(&self, id: &CommentId) -> Result<(), ApiError> {
        let body = LikeRequest {
            subject: id.as_str().to_string(),
        };
        let options = RequestOptions::post().with_json_body(&body)?;
        self.executor.execute(LIKE_ENDPOINT, options).await?;
        Ok(())
    }
}

//! CommentFetcher - Single and best-effort batch comment retrieval.
//!
//! `fetch_many` walks its ids one at a time, in order. A failing id is
//! logged and recorded in `BatchOutcome::skipped`; it never aborts the
//! batch, and it never shows up in `fetched`.

use futures::stream::{self, StreamExt};
use std::sync::Arc;

use crate::application::{RequestExecutor, RequestOptions};
use crate::domain::foundation::{ApiError, CommentId};
use crate::domain::{BatchOutcome, Comment, Post};

pub const COMMENT_ENDPOINT: &str = "/api/post/comment";

/// Fetches comments by id.
pub struct CommentFetcher {
    executor: Arc<RequestExecutor>,
}

impl CommentFetcher {
    pub fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Fetches one comment. The `commented:` prefix is stripped for the URL.
    pub async fn fetch_one(&self, id: &CommentId) -> Result<Comment, ApiError> {
        let endpoint = format!("{}/{}", COMMENT_ENDPOINT, id.bare());
        self.executor
            .execute_json(&endpoint, RequestOptions::get())
            .await
    }

    /// Fetches every id sequentially, skipping the ones that fail.
    pub async fn fetch_many(&self, ids: &[CommentId]) -> BatchOutcome<Comment, CommentId> {
        let outcome = stream::iter(ids)
            .fold(BatchOutcome::new(), |mut outcome, id| async move {
                match self.fetch_one(id).await {
                    Ok(comment) => outcome.push_fetched(comment),
                    Err(error) => {
                        tracing::warn!(comment_id = %id, error = %error, "Skipping comment that failed to load");
                        outcome.push_skipped(id.clone(), error);
                    }
                }
                outcome
            })
            .await;

        if !outcome.is_complete() {
            tracing::debug!(
                requested = outcome.requested(),
                skipped = outcome.skipped.len(),
                "Comment batch finished with omissions"
            );
        }

        outcome
    }

    /// Fetches the comments listed on a post.
    pub async fn fetch_for_post(&self, post: &Post) -> BatchOutcome<Comment, CommentId> {
        self.fetch_many(&post.comment_ids).await
    }
}

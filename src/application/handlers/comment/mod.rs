//! Comment handlers.

mod comment_client;
mod comment_fetcher;

pub use comment_client::CommentClient;
pub use comment_fetcher::{CommentFetcher, COMMENT_ENDPOINT};

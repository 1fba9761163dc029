//! Application handlers.
//!
//! Each handler sequences `RequestExecutor` calls for one area of the API
//! and owns the error policy of that area:
//!
//! - `auth` - collapses every failure into `false`
//! - `comment` - returns errors, except the batch fetch which skips them
//! - `post` - returns errors, except the listing fetch which empties the cache

pub mod auth;
pub mod comment;
pub mod post;

pub use auth::AuthSessionController;
pub use comment::{CommentClient, CommentFetcher};
pub use post::PostClient;

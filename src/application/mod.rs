//! Application layer - Request execution and handlers.
//!
//! `RequestExecutor` turns transport responses into `ApiResponse` or
//! `ApiError`; the handlers build the client's operations on top of it.

pub mod handlers;
mod request_executor;

#[cfg(test)]
pub(crate) mod test_support;

pub use handlers::{AuthSessionController, CommentClient, CommentFetcher, PostClient};
pub use request_executor::{ApiResponse, RequestExecutor, RequestOptions};

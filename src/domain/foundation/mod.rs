//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers and error types that every other part of the
//! client speaks in.

mod errors;
mod ids;

pub use errors::{ApiError, ErrorEnvelope, TransportError, ValidationError};
pub use ids::{CommentId, PostId, COMMENT_PREFIX, POST_PREFIX};

//! Domain layer containing the client's value types.
//!
//! # Module Organization
//!
//! - `foundation` - Record ids and error types
//! - `post` - Posts and the bodies that create or like them
//! - `comment` - Comments and the body that creates them
//! - `session` - Client view of the authentication state
//! - `batch` - Outcome of a best-effort multi-id fetch

pub mod batch;
pub mod comment;
pub mod foundation;
pub mod post;
pub mod session;

pub use batch::{BatchOutcome, Skipped};
pub use comment::{Comment, NewComment};
pub use post::{CreatedId, LikeRequest, NewPost, Post};
pub use session::{Credentials, Session, UserRef};

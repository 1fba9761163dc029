//! Post handlers.

mod post_client;

pub use post_client::{PostClient, FIRST_PAGE, LATEST_ENDPOINT, LIKE_ENDPOINT, NEW_POST_ENDPOINT};

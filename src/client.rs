//! Wiring of transport, stores and handlers into one client.

use std::sync::Arc;

use crate::adapters::{ReqwestTransport, WatchStore};
use crate::application::{
    AuthSessionController, CommentClient, CommentFetcher, PostClient, RequestExecutor,
};
use crate::config::ApiConfig;
use crate::domain::foundation::TransportError;
use crate::domain::{Post, Session};
use crate::ports::{HttpTransport, StateStore};

/// All client operations sharing one transport (and so one cookie jar).
///
/// # Example
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use postboard_client::config::ClientConfig;
/// use postboard_client::PostboardClient;
///
/// let config = ClientConfig::load_validated()?;
/// let client = PostboardClient::from_config(&config.api)?;
///
/// if client.auth.login("alice", "hunter2").await && client.auth.check_status().await {
///     let posts = client.posts.fetch_latest(0).await;
///     if let Some(post) = posts.first() {
///         let comments = client.comments.fetch_for_post(post).await.into_fetched();
///         println!("{} has {} comments", post.heading, comments.len());
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct PostboardClient {
    pub auth: AuthSessionController,
    pub posts: PostClient,
    pub comments: CommentFetcher,
    pub comment_actions: CommentClient,
    session: Arc<dyn StateStore<Session>>,
    post_cache: Arc<dyn StateStore<Vec<Post>>>,
}

impl PostboardClient {
    /// Builds a client on the reqwest transport.
    pub fn from_config(config: &ApiConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            config.normalized_base_url(),
        ))
    }

    /// Builds a client on any transport, with fresh in-memory stores.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, base_url: &str) -> Self {
        let executor = Arc::new(RequestExecutor::new(transport, base_url));
        let session: Arc<dyn StateStore<Session>> = Arc::new(WatchStore::<Session>::default());
        let post_cache: Arc<dyn StateStore<Vec<Post>>> =
            Arc::new(WatchStore::<Vec<Post>>::default());

        Self {
            auth: AuthSessionController::new(executor.clone(), session.clone()),
            posts: PostClient::new(executor.clone(), post_cache.clone()),
            comments: CommentFetcher::new(executor.clone()),
            comment_actions: CommentClient::new(executor),
            session,
            post_cache,
        }
    }

    /// Session store, for UI code that wants to observe it directly.
    pub fn session_store(&self) -> Arc<dyn StateStore<Session>> {
        self.session.clone()
    }

    /// Cached post listing store.
    pub fn post_store(&self) -> Arc<dyn StateStore<Vec<Post>>> {
        self.post_cache.clone()
    }
}

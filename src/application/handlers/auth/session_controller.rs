//! AuthSessionController - Login, signup, logout and status checks.
//!
//! Every operation answers with a plain `bool`. Failures are logged with the
//! full `ApiError` and never reach the caller, so UI code can branch on the
//! outcome without handling errors.
//!
//! Session writes:
//!
//! | Operation | Success | Failure |
//! |---|---|---|
//! | `check_status` | authenticated, user kept | unauthenticated, user cleared |
//! | `login` | untouched (confirm with `check_status`) | unauthenticated, user cleared |
//! | `signup` | untouched | untouched |
//! | `logout` | unauthenticated, user cleared | untouched |

use std::sync::Arc;
use tokio::sync::watch;

use crate::application::{RequestExecutor, RequestOptions};
use crate::domain::foundation::ApiError;
use crate::domain::{Credentials, Session, UserRef};
use crate::ports::StateStore;

pub const CHECK_ENDPOINT: &str = "/api/auth/check";
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const SIGNUP_ENDPOINT: &str = "/api/auth/signup";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Sequences auth calls and keeps the session store in step with them.
pub struct AuthSessionController {
    executor: Arc<RequestExecutor>,
    session: Arc<dyn StateStore<Session>>,
}

impl AuthSessionController {
    pub fn new(executor: Arc<RequestExecutor>, session: Arc<dyn StateStore<Session>>) -> Self {
        Self { executor, session }
    }

    /// Current session value.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    /// Receiver for session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.session.subscribe()
    }

    /// Asks the server whether the session cookie is still valid.
    pub async fn check_status(&self) -> bool {
        match self.executor.execute(CHECK_ENDPOINT, RequestOptions::get()).await {
            Ok(_) => {
                self.session.modify(&mut |session| {
                    if session.authenticated {
                        return false;
                    }
                    session.authenticated = true;
                    true
                });
                true
            }
            Err(error) => {
                tracing::warn!(error = %error, "Auth check failed");
                self.session.set(Session::unauthenticated());
                false
            }
        }
    }

    /// Logs in. The server sets the session cookie on success.
    pub async fn login(&self, username: impl Into<String>, password: impl Into<String>) -> bool {
        let credentials = Credentials::new(username, password);

        match self.submit(LOGIN_ENDPOINT, &credentials).await {
            Ok(()) => {
                tracing::info!(username = %credentials.username, "Login succeeded");
                true
            }
            Err(error) => {
                tracing::warn!(username = %credentials.username, error = %error, "Login failed");
                self.session.set(Session::unauthenticated());
                false
            }
        }
    }

    /// Creates an account. Does not sign in.
    pub async fn signup(&self, username: impl Into<String>, password: impl Into<String>) -> bool {
        let credentials = Credentials::new(username, password);

        match self.submit(SIGNUP_ENDPOINT, &credentials).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(username = %credentials.username, error = %error, "Signup failed");
                false
            }
        }
    }

    /// Ends the server session and clears the local one.
    pub async fn logout(&self) -> bool {
        match self.executor.execute(LOGOUT_ENDPOINT, RequestOptions::get()).await {
            Ok(_) => {
                self.session.set(Session::unauthenticated());
                true
            }
            Err(error) => {
                tracing::warn!(error = %error, "Logout failed");
                false
            }
        }
    }

    /// Records who is signed in. Ignored unless the session is authenticated.
    pub fn set_current_user(&self, user: UserRef) -> bool {
        let mut user = Some(user);
        self.session.modify(&mut |session| {
            if !session.authenticated || session.user == user {
                return false;
            }
            session.user = user.take();
            true
        })
    }

    async fn submit(&self, endpoint: &str, credentials: &Credentials) -> Result<(), ApiError> {
        let options = RequestOptions::post().with_json_body(&credentials.to_request_body())?;
        self.executor.execute(endpoint, options).await?;
        Ok(())
    }
}

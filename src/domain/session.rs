//! Client-side authentication state.
//!
//! The durable identity lives in the server's session cookie; this is only
//! the client's view of it, created unauthenticated at startup.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Reference to the signed-in user, filled in by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub username: String,
}

impl UserRef {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Authentication status as observed by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<UserRef>,
}

impl Session {
    /// The signed-out state: not authenticated, no user.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// An authenticated session, optionally with a known user.
    pub fn authenticated(user: Option<UserRef>) -> Self {
        Self {
            authenticated: true,
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Username and password for login and signup.
///
/// The password is kept behind [`SecretString`] so it never ends up in logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Wire body `{username, password}`.
    pub fn to_request_body(&self) -> CredentialsBody<'_> {
        CredentialsBody {
            username: &self.username,
            password: self.password.expose_secret(),
        }
    }
}

/// Serialized form of [`Credentials`].
#[derive(Serialize)]
pub struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

//! Namespaced record identifiers.
//!
//! The server addresses records as `"<table>:<key>"` (for example
//! `Posts:8f2k1` or `commented:x91b`). Some endpoints want the full form,
//! others only the bare key. These types accept either form and always keep
//! the full one, so callers never have to remember which shape they hold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Table prefix of post records.
pub const POST_PREFIX: &str = "Posts";

/// Table prefix of comment records.
pub const COMMENT_PREFIX: &str = "commented";

/// Strips `prefix:` from `raw` if present.
fn strip_namespace<'a>(prefix: &str, raw: &'a str) -> &'a str {
    raw.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(raw)
}

fn namespaced(prefix: &str, field: &str, raw: &str) -> Result<String, ValidationError> {
    let bare = strip_namespace(prefix, raw.trim());
    if bare.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if bare.contains(&['/', '?', '#'][..]) {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a record key", bare),
        ));
    }
    Ok(format!("{}:{}", prefix, bare))
}

/// Identifier of a post (`Posts:<key>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostId(String);

impl PostId {
    /// Creates a PostId from either the bare key or the namespaced form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        namespaced(POST_PREFIX, "post_id", raw.as_ref()).map(Self)
    }

    /// Returns the full namespaced id, e.g. `Posts:8f2k1`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key without the `Posts:` prefix.
    pub fn bare(&self) -> &str {
        strip_namespace(POST_PREFIX, &self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PostId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// Identifier of a comment (`commented:<key>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommentId(String);

impl CommentId {
    /// Creates a CommentId from either the bare key or the namespaced form.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        namespaced(COMMENT_PREFIX, "comment_id", raw.as_ref()).map(Self)
    }

    /// Returns the full namespaced id, e.g. `commented:x91b`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key without the `commented:` prefix.
    pub fn bare(&self) -> &str {
        strip_namespace(COMMENT_PREFIX, &self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CommentId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommentId> for String {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

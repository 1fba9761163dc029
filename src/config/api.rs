//! API connection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how to reach the Postboard API
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means requests may wait forever.
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Follow 3xx responses to their final target.
    ///
    /// On by default, since login answers with a 303 to `/`. When off, a 302
    /// is reported as the redirect sentinel and any other 3xx is an error.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

impl ApiConfig {
    /// Configuration pointing at `base_url` with all other values defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Get the timeout as a Duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API_BASE_URL"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > 300 {
                return Err(ValidationError::InvalidTimeout);
            }
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_follow_redirects() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("postboard-client/", env!("CARGO_PKG_VERSION")).to_string()
}

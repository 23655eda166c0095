//! Client configuration.
//!
//! A single base-URL variable selects the backend origin; timeouts and the
//! bearer token are optional overrides.

use sevadash_core::defaults;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub base_url: String,
    /// Timeout for list/create/update/delete requests in seconds.
    pub timeout_secs: u64,
    /// Timeout for CSV upload requests in seconds.
    pub upload_timeout_secs: u64,
    /// Bearer token attached to every request when present.
    pub auth_token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            upload_timeout_secs: defaults::UPLOAD_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, with `.env` support.
    ///
    /// - `SEVADASH_API_BASE` — backend origin (default `http://127.0.0.1:8000`)
    /// - `SEVADASH_API_TIMEOUT_SECS` — request timeout override
    /// - `SEVADASH_API_TOKEN` — bearer token
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(base) = std::env::var("SEVADASH_API_BASE") {
            config.base_url = base.trim_end_matches('/').to_string();
        }
        if let Ok(val) = std::env::var("SEVADASH_API_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.timeout_secs = secs;
            }
        }
        if let Ok(token) = std::env::var("SEVADASH_API_TOKEN") {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }
        config
    }

    /// Override the backend origin, normalizing a trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

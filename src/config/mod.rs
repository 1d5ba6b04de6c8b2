//! Runtime configuration for ghtool
//!
//! ghtool keeps no configuration file. Everything is resolved per invocation
//! from global flags (with environment fallbacks handled by clap) and then
//! validated here.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ConfigError, Result};

/// GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL that endpoint paths are appended to
    pub api_url: Url,

    /// Per-request timeout (connect + read)
    pub timeout: Duration,

    /// User-Agent header value; GitHub rejects requests without one
    pub user_agent: String,
}

impl Config {
    /// Build a configuration from optional overrides.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the URL does not parse, cannot carry path
    /// segments, or the timeout is zero.
    pub fn resolve(api_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        let raw_url = api_url.unwrap_or(DEFAULT_API_URL);
        let api_url = Url::parse(raw_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: raw_url.to_string(),
            reason: e.to_string(),
        })?;

        if api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: raw_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            }
            .into());
        }

        let secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout("must be greater than zero".to_string()).into());
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(secs),
            user_agent: format!("ghtool/{}", env!("CARGO_PKG_VERSION")),
        })
    }
}

//! Configuration loading from environment variables.

use serde::Deserialize;
use std::env;

use crate::constants::{ARTICLES_PAGE_SIZE, SEARCH_DEBOUNCE_MS};

/// Runtime configuration for the admin editor.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the content backend, without a trailing slash.
    pub api_base_url: String,
    /// Page size for the admin article listing.
    pub page_size: u32,
    /// Debounce window for product search, in milliseconds.
    pub search_debounce_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("GEMCMS_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:5280/api".to_string()),
            page_size: env::var("GEMCMS_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(ARTICLES_PAGE_SIZE),
            search_debounce_ms: env::var("GEMCMS_SEARCH_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SEARCH_DEBOUNCE_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn from_env_applies_defaults() {
        let config = Config::from_env();
        assert!(config.page_size > 0);
        assert!(config.search_debounce_ms > 0);
        assert!(!config.api_base_url.ends_with('/'));
    }
}

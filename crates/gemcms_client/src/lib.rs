//! Async REST client for the content-backend collaborators.
//!
//! The admin surface treats articles, categories, products, and image
//! upload as external services; this crate owns the wire plumbing so the
//! markup engine never awaits anything.

/// Article endpoints (search, create, update, status).
pub mod articles;
/// Category endpoints.
pub mod categories;
/// Error types.
pub mod error;
/// Cover-image upload.
pub mod media;
/// Product keyword search.
pub mod products;
/// Debounced product search with stale-response suppression.
pub mod search;

pub use error::ClientError;
pub use search::{ProductSearch, SearchOutcome};

use gemcms_core::Config;
use reqwest::Response;

/// Shared HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`; a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Build a client from the environment-driven configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Map non-success statuses to a typed error carrying the body.
    pub(crate) async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:5280/api/");
        assert_eq!(client.base_url(), "http://localhost:5280/api");
        assert_eq!(client.url("blog/posts"), "http://localhost:5280/api/blog/posts");
    }
}

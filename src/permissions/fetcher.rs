//! Fetcher seam for directive files.
//!
//! `PermissionResolver` only ever needs the body of `llms.txt` or
//! `robots.txt`; putting that behind a trait keeps the resolver testable
//! without network access.

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PermissionError, PermissionResult};

/// Fetches directive file bodies (`llms.txt`, `robots.txt`).
#[async_trait]
pub trait DirectiveFetcher: Send + Sync {
    /// Fetch a directive file body.
    ///
    /// Any failure (timeout, network error, non-2xx status) is an `Err`;
    /// the resolver decides what failure means at each step.
    async fn fetch(&self, url: &str) -> PermissionResult<String>;
}

/// HTTP implementation backed by `reqwest`.
pub struct HttpDirectiveFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpDirectiveFetcher {
    /// Create a fetcher with the given timeout and identifying user agent.
    pub fn new(timeout: std::time::Duration, user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            user_agent: user_agent.into(),
        }
    }
}

impl Default for HttpDirectiveFetcher {
    fn default() -> Self {
        Self::new(
            std::time::Duration::from_secs(5),
            "CiteReadyBot/0.1 (+https://citeready.dev/bot)",
        )
    }
}

#[async_trait]
impl DirectiveFetcher for HttpDirectiveFetcher {
    async fn fetch(&self, url: &str) -> PermissionResult<String> {
        debug!(url = %url, "fetching directive file");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PermissionError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    PermissionError::Http(Box::new(e))
                }
            })?;

        if !response.status().is_success() {
            return Err(PermissionError::Unavailable {
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| PermissionError::Http(Box::new(e)))
    }
}

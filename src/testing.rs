//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use this library without making
//! real network calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{PermissionError, PermissionResult};
use crate::permissions::DirectiveFetcher;

/// A directive fetcher serving preloaded bodies.
///
/// URLs without a preloaded body resolve to
/// [`PermissionError::Unavailable`], which the resolver treats the same as
/// a 404. Every requested URL is recorded for assertions.
#[derive(Default, Clone)]
pub struct StaticDirectiveFetcher {
    files: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StaticDirectiveFetcher {
    /// Create a fetcher with no files (everything unavailable).
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a directive file body for a URL.
    pub fn with_file(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.files.insert(url.into(), body.into());
        self
    }

    /// Every URL this fetcher was asked for, in order.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }
}

#[async_trait]
impl DirectiveFetcher for StaticDirectiveFetcher {
    async fn fetch(&self, url: &str) -> PermissionResult<String> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(url.to_string());

        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| PermissionError::Unavailable {
                url: url.to_string(),
            })
    }
}

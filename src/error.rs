//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during an analysis run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Permission check determined the target blocks automated analysis
    #[error("automated analysis not permitted: {reason}")]
    PermissionDenied { reason: String },

    /// Permission check failed in a way that could not be recovered
    #[error("permission check failed: {0}")]
    Permission(#[from] PermissionError),

    /// Invalid analysis input
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur while resolving crawl permissions.
///
/// These are mostly internal: `PermissionResolver::resolve` recovers
/// transport failures into a fail-open decision rather than returning them.
#[derive(Debug, Error)]
pub enum PermissionError {
    /// URL could not be parsed into an origin
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Directive file fetch timed out
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// Directive file was not found or returned a non-success status
    #[error("directive file unavailable: {url}")]
    Unavailable { url: String },
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Result type alias for permission operations.
pub type PermissionResult<T> = std::result::Result<T, PermissionError>;

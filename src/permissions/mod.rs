//! Permission gating for automated analysis.
//!
//! - [`directives`] - line-oriented `llms.txt`/`robots.txt` model
//! - [`fetcher`] - fetcher trait seam and HTTP implementation
//! - [`resolver`] - the llms.txt → robots.txt cascade

pub mod directives;
pub mod fetcher;
pub mod resolver;

pub use directives::DirectiveFile;
pub use fetcher::{DirectiveFetcher, HttpDirectiveFetcher};
pub use resolver::{PermissionResolver, ResolverConfig};

use serde::{Deserialize, Serialize};

/// Which file (if any) produced a permission decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    /// Decision came from `llms.txt`
    #[serde(rename = "llms.txt")]
    LlmsTxt,

    /// Decision came from `robots.txt`
    #[serde(rename = "robots.txt")]
    RobotsTxt,

    /// Neither file was reachable
    None,

    /// The check itself failed (e.g. unparseable URL)
    Error,
}

impl DecisionSource {
    /// Display name of the underlying file, for decision reasons.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::LlmsTxt => "llms.txt",
            Self::RobotsTxt => "robots.txt",
            Self::None => "none",
            Self::Error => "error",
        }
    }
}

/// The outcome of a permission check for one URL.
///
/// Immutable once produced; the core does not persist it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionDecision {
    /// Whether automated fetching/analysis is allowed
    pub allowed: bool,

    /// Human-readable explanation of the decision
    pub reason: String,

    /// Where the decision came from
    pub source: DecisionSource,

    /// When blocked, whether the caller should offer the manual
    /// paste-content path instead
    pub requires_manual: bool,
}

impl PermissionDecision {
    /// An unconditional allow, for callers that skip the check entirely
    /// (e.g. manually pasted content).
    pub fn bypassed(reason: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: reason.into(),
            source: DecisionSource::None,
            requires_manual: false,
        }
    }
}

//! The analysis pipeline.
//!
//! Orchestrates permission gate → signal extraction → scoring →
//! recommendations → citation synthesis. Every report is built fresh from
//! local input and nothing is cached or shared between calls, so concurrent
//! analyses are safe by construction. Two simultaneous analyses of the same
//! URL do duplicate the permission fetches; a per-origin cache would remove
//! that but is not implemented.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AnalysisError, Result};
use crate::permissions::{
    DirectiveFetcher, HttpDirectiveFetcher, PermissionDecision, PermissionResolver, ResolverConfig,
};
use crate::recommend::{recommend, RecommendationSet};
use crate::scoring::{
    BooleanHeuristicScorer, CategoryScore, ScoringMode, WeightedCategoryScorer,
};
use crate::signals::{extract_all, PageSignals};
use crate::synthesize::{synthesize, CitationCandidate};

/// Configuration for [`Analyzer`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Which readiness model to run
    pub scoring_mode: ScoringMode,

    /// Permission-resolution settings
    pub resolver: ResolverConfig,

    /// Timeout for each directive-file fetch
    pub fetch_timeout: std::time::Duration,

    /// Identifying user agent sent with directive fetches
    pub user_agent: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::default(),
            resolver: ResolverConfig::default(),
            fetch_timeout: std::time::Duration::from_secs(5),
            user_agent: "CiteReadyBot/0.1 (+https://citeready.dev/bot)".to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the scoring mode.
    pub fn with_scoring_mode(mut self, mode: ScoringMode) -> Self {
        self.scoring_mode = mode;
        self
    }

    /// Set the directive-fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the resolver config.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }
}

/// The full result of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,

    /// Domain the analysis was scoped to
    pub domain: String,

    /// Page title if one was found in the content
    pub title: Option<String>,

    pub signals: PageSignals,

    /// Normalized readiness in 0..=100, under the configured mode
    pub readiness_score: u8,

    /// Weighted-category detail rows
    pub category_scores: Vec<CategoryScore>,

    pub recommendations: RecommendationSet,
    pub citations: Vec<CitationCandidate>,

    /// Permission decision, when the URL-gated path was used
    pub permission: Option<PermissionDecision>,

    pub analyzed_at: DateTime<Utc>,

    /// SHA-256 of the analyzed content
    pub content_hash: String,
}

/// Runs the citation-readiness pipeline.
pub struct Analyzer<F = HttpDirectiveFetcher> {
    resolver: PermissionResolver<F>,
    config: AnalyzerConfig,
}

impl Analyzer<HttpDirectiveFetcher> {
    /// Create an analyzer with default config and a real HTTP fetcher.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with explicit config and a real HTTP fetcher.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        let fetcher = HttpDirectiveFetcher::new(config.fetch_timeout, config.user_agent.clone());
        Self {
            resolver: PermissionResolver::with_config(fetcher, config.resolver.clone()),
            config,
        }
    }
}

impl Default for Analyzer<HttpDirectiveFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: DirectiveFetcher> Analyzer<F> {
    /// Create an analyzer over a custom directive fetcher (tests, caching).
    pub fn with_fetcher(fetcher: F, config: AnalyzerConfig) -> Self {
        Self {
            resolver: PermissionResolver::with_config(fetcher, config.resolver.clone()),
            config,
        }
    }

    /// Analyze content directly, without any permission gate.
    ///
    /// Pure and synchronous: same input, same report (modulo id/timestamp).
    pub fn analyze(&self, content: &str, domain: &str) -> AnalysisReport {
        debug!(domain = %domain, content_length = content.len(), "analysis starting");

        let signals = extract_all(content, domain);

        // Category rows always come from the weighted table: they drive the
        // recommendation layer in both modes. The mode only selects which
        // formula produces the readiness number.
        let weighted = WeightedCategoryScorer.score(content);
        let readiness_score = match self.config.scoring_mode {
            ScoringMode::WeightedCategory => weighted.readiness,
            ScoringMode::BooleanHeuristic => BooleanHeuristicScorer.score(&signals).readiness,
        };

        let recommendations = recommend(&weighted.categories);
        let title = extract_title(content);
        let citations = synthesize(&signals, domain, title.as_deref().unwrap_or(domain));

        info!(
            domain = %domain,
            readiness = readiness_score,
            recommendations = recommendations.len(),
            citations = citations.len(),
            "analysis complete"
        );

        AnalysisReport {
            id: Uuid::new_v4(),
            domain: domain.to_string(),
            title,
            signals,
            readiness_score,
            category_scores: weighted.categories,
            recommendations,
            citations,
            permission: None,
            analyzed_at: Utc::now(),
            content_hash: hash_content(content),
        }
    }

    /// Resolve whether automated analysis of `url` is permitted.
    pub async fn resolve_permission(&self, url: &str) -> PermissionDecision {
        self.resolver.resolve(url).await
    }

    /// Permission-gated analysis of caller-supplied content.
    ///
    /// When the target blocks AI crawlers the pipeline short-circuits with
    /// [`AnalysisError::PermissionDenied`], unless `manual_content` marks
    /// the content as pasted by the user, which bypasses the gate.
    pub async fn analyze_url(
        &self,
        url: &str,
        content: &str,
        domain: &str,
        manual_content: bool,
    ) -> Result<AnalysisReport> {
        let decision = if manual_content {
            PermissionDecision::bypassed("content supplied manually")
        } else {
            self.resolver.resolve(url).await
        };

        if !decision.allowed {
            return Err(AnalysisError::PermissionDenied {
                reason: decision.reason,
            });
        }

        let mut report = self.analyze(content, domain);
        report.permission = Some(decision);
        Ok(report)
    }
}

fn extract_title(content: &str) -> Option<String> {
    let title_pattern = Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap();
    title_pattern
        .captures(content)
        .map(|cap| crate::signals::strip_tags(&cap[1]))
        .filter(|t| !t.is_empty())
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticDirectiveFetcher;

    fn analyzer() -> Analyzer<StaticDirectiveFetcher> {
        Analyzer::with_fetcher(StaticDirectiveFetcher::new(), AnalyzerConfig::default())
    }

    #[test]
    fn test_analyze_empty_content() {
        let report = analyzer().analyze("", "example.com");

        assert_eq!(report.readiness_score, 0);
        assert!(report.citations.is_empty());
        assert!(!report.recommendations.is_empty());
        assert_eq!(report.content_hash.len(), 64);
        assert!(report.permission.is_none());
    }

    #[test]
    fn test_boolean_mode_base_score() {
        let analyzer = Analyzer::with_fetcher(
            StaticDirectiveFetcher::new(),
            AnalyzerConfig::new().with_scoring_mode(ScoringMode::BooleanHeuristic),
        );
        let report = analyzer.analyze("", "example.com");

        assert_eq!(report.readiness_score, 50);
    }

    #[test]
    fn test_title_extracted() {
        let report = analyzer().analyze("<title>My Page</title>", "example.com");
        assert_eq!(report.title.as_deref(), Some("My Page"));
    }

    #[tokio::test]
    async fn test_blocked_url_short_circuits() {
        let fetcher = StaticDirectiveFetcher::new()
            .with_file("https://example.com/llms.txt", "User-agent: *\nDisallow: /");
        let analyzer = Analyzer::with_fetcher(fetcher, AnalyzerConfig::default());

        let result = analyzer
            .analyze_url("https://example.com", "<p>content</p>", "example.com", false)
            .await;

        assert!(matches!(
            result,
            Err(AnalysisError::PermissionDenied { .. })
        ));
    }

    #[tokio::test]
    async fn test_manual_content_bypasses_block() {
        let fetcher = StaticDirectiveFetcher::new()
            .with_file("https://example.com/llms.txt", "User-agent: *\nDisallow: /");
        let analyzer = Analyzer::with_fetcher(fetcher, AnalyzerConfig::default());

        let report = analyzer
            .analyze_url("https://example.com", "what is this", "example.com", true)
            .await
            .unwrap();

        assert!(report.readiness_score > 0);
        assert!(report.permission.unwrap().allowed);

        // The gate was never consulted.
        assert!(analyzer.resolver.fetcher().fetched_urls().is_empty());
    }
}

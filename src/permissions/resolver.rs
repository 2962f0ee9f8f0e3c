//! Permission resolution for automated page analysis.
//!
//! Consults `{origin}/llms.txt` first, then `{origin}/robots.txt`, and
//! resolves to a single [`PermissionDecision`]. All transport failures are
//! recovered into a fail-open decision: an unreachable directive file never
//! blocks the pipeline, only an explicit disallow does. That asymmetry
//! (fail-open on errors, fail-closed on explicit blocks) is deliberate.

use tracing::{debug, info};
use url::Url;

use super::directives::DirectiveFile;
use super::fetcher::DirectiveFetcher;
use super::{DecisionSource, PermissionDecision};

/// Configuration for [`PermissionResolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Our own crawler identity, matched against user-agent sections
    pub crawler_name: String,

    /// Generic tokens that mark an llms.txt section as targeting AI crawlers
    pub llms_agent_tokens: Vec<String>,

    /// Known AI crawler names used when reading robots.txt
    pub robots_agent_tokens: Vec<String>,

    /// Crawl delays above this many seconds count as a block
    pub max_crawl_delay_secs: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            crawler_name: "citereadybot".to_string(),
            llms_agent_tokens: vec!["ai".to_string(), "bot".to_string()],
            robots_agent_tokens: vec![
                "gptbot".to_string(),
                "claudebot".to_string(),
                "anthropic-ai".to_string(),
                "perplexitybot".to_string(),
                "google-extended".to_string(),
                "ccbot".to_string(),
                "bytespider".to_string(),
                "cohere-ai".to_string(),
            ],
            max_crawl_delay_secs: 10.0,
        }
    }
}

impl ResolverConfig {
    /// Create a config with default token lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the crawler identity.
    pub fn with_crawler_name(mut self, name: impl Into<String>) -> Self {
        self.crawler_name = name.into();
        self
    }

    /// Set the crawl-delay block threshold.
    pub fn with_max_crawl_delay(mut self, secs: f64) -> Self {
        self.max_crawl_delay_secs = secs;
        self
    }
}

/// Resolves whether automated analysis of a URL is permitted.
///
/// Stateless apart from its config: concurrent resolves for the same origin
/// each fetch independently. A per-origin decision cache would be a
/// reasonable addition but is not implemented here.
pub struct PermissionResolver<F> {
    fetcher: F,
    config: ResolverConfig,
}

impl<F> PermissionResolver<F> {
    /// The underlying directive fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F: DirectiveFetcher> PermissionResolver<F> {
    /// Create a resolver over a directive fetcher.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            config: ResolverConfig::default(),
        }
    }

    /// Create a resolver with explicit config.
    pub fn with_config(fetcher: F, config: ResolverConfig) -> Self {
        Self { fetcher, config }
    }

    /// Resolve the permission decision for a URL.
    ///
    /// Never returns an error: unresolvable checks fail open.
    pub async fn resolve(&self, url: &str) -> PermissionDecision {
        let origin = match derive_origin(url) {
            Some(origin) => origin,
            None => {
                return PermissionDecision {
                    allowed: true,
                    reason: format!("could not derive origin from '{url}'"),
                    source: DecisionSource::Error,
                    requires_manual: false,
                };
            }
        };

        // llms.txt first. A successfully fetched llms.txt is authoritative
        // either way; robots.txt is only consulted when llms.txt is absent.
        let llms_url = format!("{origin}/llms.txt");
        match self.fetcher.fetch(&llms_url).await {
            Ok(body) => return self.decide(&body, DecisionSource::LlmsTxt),
            Err(e) => debug!(url = %llms_url, error = %e, "llms.txt not available"),
        }

        let robots_url = format!("{origin}/robots.txt");
        match self.fetcher.fetch(&robots_url).await {
            Ok(body) => self.decide(&body, DecisionSource::RobotsTxt),
            Err(e) => {
                debug!(url = %robots_url, error = %e, "robots.txt not available");
                PermissionDecision {
                    allowed: true,
                    reason: "no restrictions found or could not check".to_string(),
                    source: DecisionSource::None,
                    requires_manual: false,
                }
            }
        }
    }

    fn decide(&self, body: &str, source: DecisionSource) -> PermissionDecision {
        let file = DirectiveFile::parse(body);
        let tokens = self.agent_tokens(source);
        let token_refs: Vec<&str> = tokens.iter().map(String::as_str).collect();

        if file.blocks(&token_refs, self.config.max_crawl_delay_secs) {
            info!(source = ?source, "directive file blocks AI crawlers");
            PermissionDecision {
                allowed: false,
                reason: format!("{} blocks AI crawlers", source.file_name()),
                source,
                requires_manual: true,
            }
        } else {
            PermissionDecision {
                allowed: true,
                reason: format!("{} permits AI crawlers", source.file_name()),
                source,
                requires_manual: false,
            }
        }
    }

    fn agent_tokens(&self, source: DecisionSource) -> Vec<String> {
        let mut tokens = vec![self.config.crawler_name.to_lowercase()];
        match source {
            DecisionSource::RobotsTxt => {
                tokens.extend(self.config.robots_agent_tokens.iter().map(|t| t.to_lowercase()));
            }
            _ => {
                tokens.extend(self.config.llms_agent_tokens.iter().map(|t| t.to_lowercase()));
            }
        }
        tokens
    }
}

/// Derive `scheme://host[:port]` from a possibly schemeless URL.
fn derive_origin(url: &str) -> Option<String> {
    let candidate = if url.contains("://") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    let parsed = Url::parse(&candidate).ok()?;
    let host = parsed.host_str()?;

    match parsed.port() {
        Some(port) => Some(format!("{}://{}:{}", parsed.scheme(), host, port)),
        None => Some(format!("{}://{}", parsed.scheme(), host)),
    }
}

//! Citation-Readiness Analysis Library
//!
//! Analyzes raw page content and produces a quantified estimate of how
//! likely an AI answer engine is to cite that page, plus prioritized
//! improvement recommendations. A heuristic estimator, not a guarantee of
//! citation: detection is pattern and keyword matching, never NLP.
//!
//! # Pipeline
//!
//! Permission gate → signal extraction → scoring → recommendations, with
//! citation-candidate synthesis alongside:
//!
//! ```rust,ignore
//! use citeready::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::new();
//!
//! // Permission-gated path (consults llms.txt, then robots.txt)
//! let report = analyzer
//!     .analyze_url("https://example.com/page", &content, "example.com", false)
//!     .await?;
//!
//! // Direct path for manually pasted content
//! let report = analyzer.analyze(&content, "example.com");
//! println!("readiness: {}", report.readiness_score);
//! ```
//!
//! # Modules
//!
//! - [`permissions`] - llms.txt/robots.txt gate with fail-open semantics
//! - [`signals`] - independent pure extractors over page content
//! - [`scoring`] - weighted-category and legacy additive readiness models
//! - [`recommend`] - tiered recommendations from absent categories
//! - [`synthesize`] - citation-candidate records from signal collections
//! - [`analyzer`] - pipeline orchestration
//! - [`testing`] - mock implementations for testing

pub mod analyzer;
pub mod error;
pub mod permissions;
pub mod recommend;
pub mod scoring;
pub mod signals;
pub mod synthesize;
pub mod testing;

// Re-export core types at crate root
pub use analyzer::{AnalysisReport, Analyzer, AnalyzerConfig};
pub use error::{AnalysisError, PermissionError, Result};
pub use permissions::{
    DecisionSource, DirectiveFetcher, DirectiveFile, HttpDirectiveFetcher, PermissionDecision,
    PermissionResolver, ResolverConfig,
};
pub use recommend::{recommend, RecommendationSet, RecommendationTier};
pub use scoring::{
    ranking_categories, BooleanHeuristicScorer, CategoryGroup, CategoryScore, RankingCategory,
    ScoreBreakdown, ScoringMode, WeightedCategoryScorer,
};
pub use signals::{extract_all, PageSignals};
pub use synthesize::{synthesize, CitationCandidate};

// Re-export testing utilities
pub use testing::StaticDirectiveFetcher;

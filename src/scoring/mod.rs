//! Readiness scoring.
//!
//! Two scoring models exist and are selected explicitly, never merged:
//!
//! - [`WeightedCategoryScorer`] - the canonical weighted-category model
//!   (empty content scores 0)
//! - [`BooleanHeuristicScorer`] - the legacy additive model
//!   (fixed base of 50, +3 per signal)

pub mod categories;
pub mod heuristic;
pub mod weighted;

pub use categories::{max_possible_score, ranking_categories, CategoryGroup, RankingCategory};
pub use heuristic::BooleanHeuristicScorer;
pub use weighted::WeightedCategoryScorer;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::signals::PageSignals;

/// Which scoring model to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Weighted-category model (canonical)
    #[default]
    WeightedCategory,

    /// Legacy additive model: base 50, +3 per boolean signal
    BooleanHeuristic,
}

/// One category's outcome under the weighted model.
///
/// Derived per analysis, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category id from the ranking table
    pub category: String,

    pub label: String,
    pub group: CategoryGroup,
    pub weight: u32,

    /// Trigger phrases found in the content
    pub matched_terms: BTreeSet<String>,

    /// `matched_terms.len() × weight`
    pub score: u32,
}

impl CategoryScore {
    /// Whether the category matched nothing.
    pub fn is_absent(&self) -> bool {
        self.matched_terms.is_empty()
    }
}

/// Readiness score plus per-category detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Normalized readiness, always in 0..=100
    pub readiness: u8,

    /// Per-category rows (empty under the boolean model)
    pub categories: Vec<CategoryScore>,
}

/// Score content under the selected mode.
pub fn score(mode: ScoringMode, content: &str, signals: &PageSignals) -> ScoreBreakdown {
    match mode {
        ScoringMode::WeightedCategory => WeightedCategoryScorer.score(content),
        ScoringMode::BooleanHeuristic => BooleanHeuristicScorer.score(signals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::extract_all;

    #[test]
    fn test_mode_selection() {
        let signals = extract_all("", "example.com");

        let weighted = score(ScoringMode::WeightedCategory, "", &signals);
        assert_eq!(weighted.readiness, 0);

        let boolean = score(ScoringMode::BooleanHeuristic, "", &signals);
        assert_eq!(boolean.readiness, 50);
    }

    #[test]
    fn test_default_mode_is_weighted() {
        assert_eq!(ScoringMode::default(), ScoringMode::WeightedCategory);
    }
}
